//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `idx build --object-type user --object-id 42` | Build, store and print one indexable |
//! | `idx components` | Registered components and their variadic bindings |

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use idx_domain::{DomainEvent, ObjectType};
use idx_infrastructure::config::{AppConfig, ConfigLoader};
use idx_infrastructure::di::AppContext;
use idx_providers::TokioBroadcastEventBus;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::debug;

/// Command line interface for SEO Indexables
#[derive(Parser, Debug)]
#[command(name = "idx")]
#[command(about = "SEO Indexables - build derived SEO records for content objects")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build and store the indexable of one object
    Build {
        /// Object kind (post, term or user)
        #[arg(long, value_parser = parse_dispatched_type)]
        object_type: ObjectType,

        /// Object id
        #[arg(long)]
        object_id: u64,
    },

    /// List registered components and the resolved variadic bindings
    Components,
}

impl Cli {
    /// Load the configuration this invocation points at
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        loader.load().context("Failed to load configuration")
    }
}

/// Object types the build command accepts
fn parse_dispatched_type(value: &str) -> std::result::Result<ObjectType, String> {
    let object_type = value.parse::<ObjectType>().map_err(|e| e.to_string())?;
    if object_type.is_designated() {
        return Err(format!(
            "'{object_type}' is built by a designated builder; use post, term or user"
        ));
    }
    Ok(object_type)
}

/// Run a command against a wired context and render its output
pub fn execute(command: &Command, context: &AppContext) -> Result<String> {
    match command {
        Command::Build {
            object_type,
            object_id,
        } => build(context, *object_type, *object_id),
        Command::Components => Ok(components(context)),
    }
}

fn build(context: &AppContext, object_type: ObjectType, object_id: u64) -> Result<String> {
    let mut events = context.subscribe();
    let report = context
        .build_manager()?
        .build_with_report(object_id, object_type, None)
        .with_context(|| format!("Failed to build indexable for {object_type} {object_id}"))?;
    debug!(state = %report.state, "Build finished");

    let mut output = serde_json::to_string_pretty(&report.indexable)?;
    output.push('\n');
    for failure in &report.failures {
        writeln!(output, "builder {} failed: {}", failure.builder, failure.message)?;
    }
    if report.used_fallback {
        writeln!(output, "no builder produced a result; stored unindexed record")?;
    }

    let received = events
        .as_mut()
        .map(TokioBroadcastEventBus::drain)
        .unwrap_or_default();
    for event in received {
        let DomainEvent::IndexableSaved { before, after } = &event;
        let changed = before.changed_fields(after);
        writeln!(output, "{}: changed [{}]", event.name(), changed.join(", "))?;
    }
    Ok(output)
}

fn components(context: &AppContext) -> String {
    let mut output = String::new();
    for definition in context.registry().definitions() {
        let capabilities: Vec<_> = definition
            .capabilities()
            .iter()
            .map(|capability| capability.name())
            .collect();
        let _ = writeln!(
            output,
            "{:<26} [{}] {}",
            definition.id(),
            capabilities.join(", "),
            definition.description()
        );
    }
    output.push_str(&context.resolution().to_string());
    output
}
