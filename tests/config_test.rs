// tests/config_test.rs
use genms_version::config::{load_config, LOCAL_CONFIG_FILE};
use genms_version::{VersionError, VersionOptions};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
branch = true
docker = true
master = "main"
default_branch = "develop"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let options = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(options.branch, Some(true));
    assert_eq!(options.docker, Some(true));
    assert_eq!(options.revision, None);
    assert_eq!(options.master.as_deref(), Some("main"));
    assert_eq!(options.default_branch.as_deref(), Some("develop"));
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_config(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, VersionError::Config(_)));
    assert!(err.to_string().contains("cannot read"));
}

#[test]
fn test_load_invalid_file_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"branch = \"yes\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(err.to_string().contains("cannot parse"));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(LOCAL_CONFIG_FILE), "semver = true\n").unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    let options = result.unwrap();
    assert_eq!(options, VersionOptions::new().with_semver(true));
}
