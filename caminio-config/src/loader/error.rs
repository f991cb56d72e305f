use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no host configured (set `api.host` or CAMINIO_HOST)")]
    MissingHost,
    #[error("no API key configured (set `api.api_key` or CAMINIO_API_KEY)")]
    MissingApiKey,
    #[error("invalid {field} URL '{value}'")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme '{scheme}' for {field}; expected http or https")]
    UnsupportedScheme { field: &'static str, scheme: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
