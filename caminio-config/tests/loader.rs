//! Exercises file-based loading with an explicit environment snapshot.

use std::fs;
use std::time::Duration;

use caminio_config::{ConfigLoadError, ConfigLoader, EnvConfig};
use tempfile::tempdir;

#[test]
fn loads_api_settings_from_toml() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("caminio.toml");
    fs::write(
        &path,
        r#"
[api]
host = "https://camin.io"
fqdn = "https://cdn.camin.io"
api_key = "12345XZZ"
lang = "de"

[http]
timeout_secs = 12
"#,
    )
    .expect("write config");

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect("load");

    let api = &load.config.api;
    assert_eq!(api.host_base(), "https://camin.io");
    assert_eq!(api.file_base(), "https://cdn.camin.io");
    assert_eq!(api.api_key, "12345XZZ");
    assert_eq!(api.lang, "de");
    assert_eq!(load.config.http.timeout, Duration::from_secs(12));
    assert_eq!(load.config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing.toml");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect_err("missing file");

    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn config_path_from_environment_is_honoured() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("from-env.toml");
    fs::write(&path, "[api]\nhost = \"http://localhost:3000\"\n").expect("write");

    let env = EnvConfig {
        config_path: Some(path.clone()),
        api_key: Some("env-key".into()),
        ..EnvConfig::default()
    };

    let load = ConfigLoader::new().load_with_env(env).expect("load");
    assert_eq!(load.config.api.host_base(), "http://localhost:3000");
    assert_eq!(load.config.api.api_key, "env-key");
}

#[test]
fn malformed_toml_reports_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[api\nhost = ").expect("write");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect_err("parse error");

    match err {
        ConfigLoadError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_host_is_rejected() {
    let env = EnvConfig {
        host: Some("not a url".into()),
        api_key: Some("key".into()),
        ..EnvConfig::default()
    };
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").expect("write");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env)
        .expect_err("invalid url");

    assert!(matches!(err, ConfigLoadError::InvalidUrl { field: "host", .. }));
}
