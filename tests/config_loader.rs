use std::fs;

use frontstate::config::{BuildMode, Config, ConfigError};
use frontstate::root::SliceName;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.store.mode, None);
    assert_eq!(config.persist.key, "root");
    assert_eq!(config.persist.version, 1);
    assert_eq!(config.persist.whitelist, vec![SliceName::Auth, SliceName::App]);
    assert_eq!(config.persist.dir, None);
    assert_eq!(config.diagnostics.slow_action_ms, 16);
    assert_eq!(config.diagnostics.log_capacity, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[store]
mode = "production"

[persist]
whitelist = ["auth"]
dir = "/var/lib/frontstate"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.mode(), BuildMode::Production);
    assert_eq!(config.persist.key, "root");
    assert_eq!(config.persist.whitelist, vec![SliceName::Auth]);
    assert_eq!(
        config.persist.dir.as_deref(),
        Some(std::path::Path::new("/var/lib/frontstate"))
    );
    assert_eq!(config.diagnostics.log_capacity, 100);
}

#[test]
fn test_unknown_slice_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[persist]\nwhitelist = [\"profile\"]\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    for (content, needle) in [
        ("[persist]\nkey = \"  \"\n", "persist.key"),
        ("[persist]\nkey = \"../outside\"\n", "persist.key"),
        ("[persist]\nversion = 0\n", "persist.version"),
        ("[persist]\nwhitelist = [\"app\", \"app\"]\n", "more than once"),
        ("[diagnostics]\nlog_capacity = 0\n", "log_capacity"),
    ] {
        fs::write(&path, content).unwrap();
        match Config::load_from(&path) {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains(needle), "{message} should mention {needle}")
            }
            other => panic!("expected validation error for {content:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_mode_falls_back_to_build_profile() {
    let config = Config::default();
    assert_eq!(config.mode(), BuildMode::from_build());
}
