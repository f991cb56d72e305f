//! Shared configuration library for the caminio API client.
//!
//! Configuration is composed from an optional TOML file, an optional `.env`
//! file and the process environment. Environment values win over file
//! values, which win over built-in defaults. `host` and `api_key` are
//! required; everything else has a default.

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileApiConfig, FileConfig, FileHttpConfig};
pub use models::{ApiConfig, Config, ConfigMetadata, HttpConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
