use portfolio_core::{load_config, ConfigError, PortfolioConfig};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_overrides_and_keeps_defaults() {
    let file = write_config(r#"{"heading": "Work", "stagger_seconds": 0.2, "log_level": "WARNING"}"#);
    let config = load_config(file.path()).expect("config should load");

    assert_eq!(config.heading, "Work");
    assert_eq!(config.stagger_seconds, 0.2);
    assert_eq!(config.intro, PortfolioConfig::default().intro);
    assert!(!config.strict);
}

#[test]
fn reports_parse_errors_with_path() {
    let file = write_config("{not json");
    let err = load_config(file.path()).expect_err("malformed json must fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_config(dir.path().join("missing.json")).expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn rejects_invalid_values_after_parse() {
    let file = write_config(r#"{"stagger_seconds": -1.0}"#);
    let err = load_config(file.path()).expect_err("negative stagger must fail");
    assert!(matches!(err, ConfigError::InvalidStagger(_)));
}
