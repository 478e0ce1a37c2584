//! Tests for configuration loading

use idx_domain::error::Error;
use idx_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, EventsConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn toml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.site.blog_id, 1);
    assert!(config.events.enabled);
    assert_eq!(config.events.capacity, 1024);
    assert!(config.components.disabled.is_empty());
    assert!(config.content.fixture_path.is_none());
}

#[test]
fn test_toml_overrides_defaults() {
    let file = toml_file(
        r#"
[site]
blog_id = 7

[components]
disabled = ["primary_term_builder"]

[content]
fixture_path = "content.json"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("IDX_TEST_TOML")
        .load()
        .unwrap();

    assert_eq!(config.site.blog_id, 7);
    assert_eq!(config.components.disabled, vec!["primary_term_builder"]);
    assert_eq!(
        config.content.fixture_path.as_deref(),
        Some(std::path::Path::new("content.json"))
    );
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_toml() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("idx.toml", "[site]\nblog_id = 7\n")?;
        jail.set_env("IDX_SITE__BLOG_ID", "9");
        jail.set_env("IDX_EVENTS__ENABLED", "false");

        let config = ConfigLoader::new()
            .with_config_path("idx.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.site.blog_id, 9);
        assert!(!config.events.enabled);
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_is_error() {
    let error = ConfigLoader::new()
        .with_config_path("/nonexistent/idx.toml")
        .load()
        .unwrap_err();

    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn test_invalid_values_are_rejected() {
    let zero_blog = toml_file("[site]\nblog_id = 0\n");
    let bad_level = toml_file("[logging]\nlevel = \"loud\"\n");
    let zero_capacity = toml_file("[events]\ncapacity = 0\n");

    for file in [&zero_blog, &bad_level, &zero_capacity] {
        let result = ConfigLoader::new()
            .with_config_path(file.path())
            .with_env_prefix("IDX_TEST_INVALID")
            .load();
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}

#[test]
fn test_malformed_toml_is_error() {
    let file = toml_file("[site\nblog_id = ");

    let result = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("IDX_TEST_MALFORMED")
        .load();

    assert!(result.is_err());
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("idx.toml");
    let config = ConfigBuilder::new()
        .with_events(EventsConfig {
            enabled: false,
            capacity: 16,
        })
        .disable_component("author_builder")
        .with_content_fixture("fixture.json")
        .build();
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("IDX_TEST_SAVE");

    loader.save_to_file(&config, &path).unwrap();

    assert_eq!(loader.load().unwrap(), config);
}
