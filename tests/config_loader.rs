use quizadmin::config::{Config, ConfigError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8081");
    assert!(config.api.token.is_none());
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.log.level, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("quizadmin/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "https://quiz.example/"
token = "abc"
timeout_seconds = 10

[ui]
notification_ticks = 4

[log]
level = "debug"
file = "/tmp/quizadmin-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://quiz.example/");
    assert_eq!(config.api.token.as_deref(), Some("abc"));
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.ui.notification_ticks, 4);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log_path(), PathBuf::from("/tmp/quizadmin-test.log"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_non_http_base_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"ftp://quiz\"\n");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("api.base_url")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_zero_timeout_fails_validation() {
    let (_dir, path) = write_config("[api]\ntimeout_seconds = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_default_log_path_is_under_data_dir() {
    let path = Config::default().log_path();
    assert!(path.ends_with("quizadmin/quizadmin.log"));
}
