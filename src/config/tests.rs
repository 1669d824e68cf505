//! Configuration tests

use super::*;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config.version, parsed.version);
    assert_eq!(config.defaults, parsed.defaults);
}

#[test]
fn test_config_from_file() {
    let mut config = Config::default();
    config.defaults.root = PathBuf::from("plugins");
    config.defaults.staging_columns = vec!["run_id:TEXT".to_string(), "score:DOUBLE".to_string()];

    let temp_file = NamedTempFile::new().unwrap();
    config.save_to_file(temp_file.path()).unwrap();

    let loaded = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(loaded.defaults.root, PathBuf::from("plugins"));
    assert_eq!(loaded.defaults.staging_columns.len(), 2);
}

#[test]
fn test_partial_defaults_are_filled_in() {
    let yaml = "version: \"1.0\"\ndefaults:\n  root: custom\n";
    let config: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.defaults.root, PathBuf::from("custom"));
    assert_eq!(config.defaults.plugin_version, "0.1.0");
    assert_eq!(config.defaults.staging_columns.len(), 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_defaults_section() {
    let config: Config = serde_yaml::from_str("version: \"1.0\"\n").unwrap();
    assert_eq!(config.defaults, ScaffoldDefaults::default());
}

#[test]
fn test_config_validation() {
    assert!(Config::default().validate().is_ok());

    let mut config = Config::default();
    config.version = "2.0".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.defaults.root = PathBuf::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.defaults.plugin_version = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.defaults.staging_columns = vec!["run_id".to_string()];
    let err = config.validate().unwrap_err();
    assert!(format!("{err:#}").contains("run_id"));
}

#[test]
fn test_empty_default_columns_are_valid() {
    let mut config = Config::default();
    config.defaults.staging_columns.clear();
    assert!(config.validate().is_ok());
}

#[test]
fn test_unreadable_file_reports_path() {
    let err = Config::from_file(std::path::Path::new("/nonexistent/pints.yaml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/pints.yaml"));
}
