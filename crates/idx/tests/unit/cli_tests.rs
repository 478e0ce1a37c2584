//! Tests for command execution

use idx::cli::execute;
use idx::infrastructure::AppContext;
use idx::infrastructure::config::AppConfig;
use idx::providers::FixtureContentStore;
use idx::{Command, ObjectType};
use std::io::Write;

const FIXTURE: &str = r#"{
    "site_url": "https://example.com",
    "users": {
        "42": {
            "nicename": "ada",
            "meta": { "wpseo_title": "Ada's archive", "wpseo_noindex_author": "on" }
        }
    }
}"#;

fn context() -> AppContext {
    AppContext::build_with_content(
        AppConfig::default(),
        FixtureContentStore::from_json(FIXTURE).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_build_prints_indexable_and_event() {
    let output = execute(
        &Command::Build {
            object_type: ObjectType::User,
            object_id: 42,
        },
        &context(),
    )
    .unwrap();

    let json_end = output.find("\n}\n").unwrap() + 2;
    let indexable: serde_json::Value = serde_json::from_str(&output[..json_end]).unwrap();
    assert_eq!(indexable["title"], "Ada's archive");
    assert_eq!(indexable["is_public"], false);
    assert!(output.contains("indexable_saved: changed ["));
    assert!(output.contains("title"));
}

#[test]
fn test_build_without_builder_reports_fallback() {
    let output = execute(
        &Command::Build {
            object_type: ObjectType::Term,
            object_id: 5,
        },
        &context(),
    )
    .unwrap();

    assert!(output.contains("\"post_status\": \"unindexed\""));
    assert!(output.contains("stored unindexed record"));
}

#[test]
fn test_build_refuses_designated_object_type() {
    let context = context();
    let error = execute(
        &Command::Build {
            object_type: ObjectType::HomePage,
            object_id: 1,
        },
        &context,
    )
    .unwrap_err();

    assert!(format!("{error:#}").contains("designated builder"));
    assert!(context.indexables().is_empty());
}

#[test]
fn test_components_lists_registry_and_bindings() {
    let output = execute(&Command::Components, &context()).unwrap();

    assert!(output.contains("author_builder"));
    assert!(output.contains("[indexable_builder]"));
    assert!(output.contains(
        "indexable_build_manager(builders: indexable_builder...) \
         <- [author_builder, primary_term_builder]"
    ));
}

#[test]
fn test_config_file_is_loaded() {
    let mut fixture = tempfile::NamedTempFile::new().unwrap();
    fixture.write_all(FIXTURE.as_bytes()).unwrap();
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        config,
        "[site]\nblog_id = 3\n\n[content]\nfixture_path = {:?}",
        fixture.path().display().to_string()
    )
    .unwrap();

    let cli = idx::Cli {
        config: Some(config.path().to_path_buf()),
        command: Command::Components,
    };
    let loaded = cli.load_config().unwrap();

    assert_eq!(loaded.site.blog_id, 3);
    assert!(AppContext::build(loaded).is_ok());
}
