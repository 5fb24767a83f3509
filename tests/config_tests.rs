use kubectl_grep::config::Config;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(!config.ignore_case);
    assert!(!config.exact);
    assert!(!config.show_status);
    assert_eq!(config.pass_output, None);
    assert_eq!(config.pipe_timeout_secs, 30);
}

#[test]
fn test_deserialize_partial_config() {
    let config: Config = toml::from_str(
        r#"
show_status = true
pass_output = "bat --language yaml --style plain --color always"
"#,
    )
    .expect("Failed to parse config");

    assert!(config.show_status);
    assert!(!config.ignore_case);
    assert_eq!(
        config.pass_output.as_deref(),
        Some("bat --language yaml --style plain --color always")
    );
    assert_eq!(config.pipe_timeout(), Duration::from_secs(30));
}

#[test]
fn test_serialize_default_config() {
    let toml_str = toml::to_string(&Config::default()).expect("Failed to serialize config");

    assert!(toml_str.contains("ignore_case = false"));
    assert!(toml_str.contains("exact = false"));
    assert!(toml_str.contains("show_status = false"));
    assert!(toml_str.contains("pipe_timeout_secs = 30"));
    assert!(!toml_str.contains("pass_output"));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ignore_case = true\npipe_timeout_secs = 5").unwrap();

    let config = Config::load_from(file.path());
    assert!(config.ignore_case);
    assert_eq!(config.pipe_timeout(), Duration::from_secs(5));
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ignore_case = \"definitely not a bool\"").unwrap();

    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_config_path_location() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/kubectl-grep/config.toml"));
    }
}
