//! Tests for configuration loading and validation.

use attachment_cleaner::{CleanerConfig, CleanerErrorKind, DeleteMode};
use std::collections::HashMap;
use std::io::Write;
use tempfile::Builder;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn minimal_file_uses_defaults() {
    let file = config_file(r#"base_url = "https://example.org""#);

    let config = CleanerConfig::from_file(file.path()).unwrap();

    assert_eq!(config.base_url(), "https://example.org");
    assert_eq!(*config.per_page(), 100);
    assert_eq!(*config.max_pages(), 20);
    assert_eq!(config.log_file().to_str(), Some("attachment_cleaner.log"));
    assert_eq!(*config.retention().max_age_days(), 28);
    assert_eq!(config.retention().mime_type(), "application/pdf");
    assert_eq!(config.delete_mode(), DeleteMode::DryRun);
    assert!(config.credentials().is_none());
}

#[test]
fn dangerous_mode_with_credentials_is_live() {
    let file = config_file(
        r#"
base_url = "https://example.org"
username = "editor"
password = "app-password"
mode = "dangerous"
"#,
    );

    let config = CleanerConfig::from_file(file.path()).unwrap();

    assert_eq!(config.delete_mode(), DeleteMode::Live);
    assert_eq!(config.credentials().unwrap().username(), "editor");
}

#[test]
fn other_mode_values_stay_dry_run() {
    let file = config_file(
        r#"
base_url = "https://example.org"
mode = "live"
"#,
    );

    let config = CleanerConfig::from_file(file.path()).unwrap();

    assert_eq!(config.delete_mode(), DeleteMode::DryRun);
}

#[test]
fn live_mode_requires_credentials() {
    let file = config_file(
        r#"
base_url = "https://example.org"
username = "editor"
mode = "dangerous"
"#,
    );

    let err = CleanerConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err.kind(), CleanerErrorKind::Config(e) if e.message.contains("password")));
}

#[test]
fn retention_table_overrides_policy() {
    let file = config_file(
        r#"
base_url = "https://example.org"

[retention]
max_age_days = 90
slug_patterns = ["newsletter"]
"#,
    );

    let config = CleanerConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.retention().max_age_days(), 90);
    assert_eq!(config.retention().mime_type(), "application/pdf");
    assert_eq!(config.retention().slug_patterns(), &vec!["newsletter".to_string()]);
}

#[test]
fn missing_base_url_is_rejected() {
    let file = config_file(r#"per_page = 50"#);

    assert!(CleanerConfig::from_file(file.path()).is_err());
}

#[test]
fn per_page_is_bounded() {
    let file = config_file(
        r#"
base_url = "https://example.org"
per_page = 500
"#,
    );

    let err = CleanerConfig::from_file(file.path()).unwrap_err();

    assert!(format!("{}", err).contains("per_page"));
}

#[test]
fn debug_output_redacts_password() {
    let file = config_file(
        r#"
base_url = "https://example.org"
username = "editor"
password = "hunter2"
"#,
    );

    let config = CleanerConfig::from_file(file.path()).unwrap();
    let debug = format!("{:?}", config);

    assert!(debug.contains("editor"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn relative_base_url_is_rejected() {
    let file = config_file(r#"base_url = "example.org""#);

    let err = CleanerConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err.kind(), CleanerErrorKind::Config(e) if e.message.contains("base_url")));
}

#[test]
fn max_age_days_is_bounded() {
    let file = config_file(
        r#"
base_url = "https://example.org"

[retention]
max_age_days = 4000000000
"#,
    );

    let err = CleanerConfig::from_file(file.path()).unwrap_err();

    assert!(format!("{}", err).contains("max_age_days"));
}

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn env_vars_alone_configure_a_run() {
    let config = CleanerConfig::from_file_and_env(
        None,
        vars(&[
            ("WPAC_BASE_URL", "https://example.org"),
            ("WPAC_RETENTION__MAX_AGE_DAYS", "90"),
        ]),
    )
    .unwrap();

    assert_eq!(config.base_url(), "https://example.org");
    assert_eq!(*config.retention().max_age_days(), 90);
    assert_eq!(config.delete_mode(), DeleteMode::DryRun);
}

#[test]
fn dangerous_env_mode_with_credentials_is_live() {
    let config = CleanerConfig::from_file_and_env(
        None,
        vars(&[
            ("WPAC_BASE_URL", "https://example.org"),
            ("WPAC_USERNAME", "editor"),
            ("WPAC_PASSWORD", "app-password"),
            ("WPAC_MODE", "dangerous"),
        ]),
    )
    .unwrap();

    assert_eq!(config.delete_mode(), DeleteMode::Live);
}

#[test]
fn other_env_mode_values_stay_dry_run() {
    let config = CleanerConfig::from_file_and_env(
        None,
        vars(&[
            ("WPAC_BASE_URL", "https://example.org"),
            ("WPAC_MODE", "DANGEROUS"),
        ]),
    )
    .unwrap();

    assert_eq!(config.delete_mode(), DeleteMode::DryRun);
}

#[test]
fn env_vars_override_file() {
    let file = config_file(
        r#"
base_url = "https://example.org"
username = "editor"
password = "app-password"
mode = "dangerous"
"#,
    );

    let config = CleanerConfig::from_file_and_env(
        Some(file.path()),
        vars(&[("WPAC_MODE", "dry-run"), ("WPAC_PER_PAGE", "50")]),
    )
    .unwrap();

    assert_eq!(config.delete_mode(), DeleteMode::DryRun);
    assert_eq!(*config.per_page(), 50);
    assert_eq!(config.username().as_deref(), Some("editor"));
}
