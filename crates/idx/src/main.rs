//! SEO Indexables - Entry Point

use anyhow::Result;
use clap::Parser;
use idx::Cli;
use idx::cli::execute;
use idx_infrastructure::di::AppContext;
use idx_infrastructure::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(&config.logging)?;

    let context = AppContext::build(config)?;
    print!("{}", execute(&cli.command, &context)?);
    Ok(())
}
