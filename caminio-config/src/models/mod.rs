pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::loader::error::ConfigLoadError;

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_NAMESPACE: &str = "caminio";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fully composed client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub http: HttpConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Builds a configuration in code, with defaults for everything but the
    /// host and the API key. Applies the same validation as the loader.
    pub fn new(
        host: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigLoadError> {
        let api = ApiConfig::build(ApiSettings {
            host: Some(host.into()),
            api_key: Some(api_key.into()),
            ..ApiSettings::default()
        })?;
        Ok(Self {
            api,
            http: HttpConfig::default(),
            metadata: ConfigMetadata::default(),
        })
    }

    pub fn with_fqdn(mut self, fqdn: &str) -> Result<Self, ConfigLoadError> {
        self.api.fqdn = Some(parse_base_url("fqdn", fqdn)?);
        Ok(self)
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        let lang = lang.into();
        if !lang.trim().is_empty() {
            self.api.lang = lang.trim().to_string();
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = timeout;
        self
    }
}

/// Where and how to reach the REST service.
#[derive(Clone)]
pub struct ApiConfig {
    pub host: Url,
    /// Alternate base for file URLs.
    pub fqdn: Option<Url>,
    pub api_key: String,
    /// Preferred translation locale.
    pub lang: String,
    /// Path segment every collection lives under.
    pub namespace: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host.as_str())
            .field("fqdn", &self.fqdn.as_ref().map(Url::as_str))
            .field("api_key", &"<redacted>")
            .field("lang", &self.lang)
            .field("namespace", &self.namespace)
            .finish()
    }
}

impl ApiConfig {
    /// Host without a trailing slash.
    pub fn host_base(&self) -> &str {
        self.host.as_str().trim_end_matches('/')
    }

    /// Base for mediafile URLs: `fqdn` when configured, else `host`.
    pub fn file_base(&self) -> &str {
        self.fqdn
            .as_ref()
            .unwrap_or(&self.host)
            .as_str()
            .trim_end_matches('/')
    }

    /// `<host>/<namespace>`, the prefix of every collection URL.
    pub fn api_base(&self) -> String {
        if self.namespace.is_empty() {
            self.host_base().to_string()
        } else {
            format!("{}/{}", self.host_base(), self.namespace)
        }
    }

    pub(crate) fn build(settings: ApiSettings) -> Result<Self, ConfigLoadError> {
        let host = settings.host.ok_or(ConfigLoadError::MissingHost)?;
        let api_key = settings.api_key.ok_or(ConfigLoadError::MissingApiKey)?;
        let host = parse_base_url("host", &host)?;
        let fqdn = settings
            .fqdn
            .map(|raw| parse_base_url("fqdn", &raw))
            .transpose()?;

        Ok(Self {
            host,
            fqdn,
            api_key,
            lang: settings.lang.unwrap_or_else(|| DEFAULT_LANG.to_string()),
            namespace: settings
                .namespace
                .map(|ns| ns.trim_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
        })
    }
}

/// Already-merged, not yet validated API values.
#[derive(Debug, Default, Clone)]
pub(crate) struct ApiSettings {
    pub host: Option<String>,
    pub fqdn: Option<String>,
    pub api_key: Option<String>,
    pub lang: Option<String>,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Provenance of the composed configuration.
#[derive(Debug, Default, Clone)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

fn parse_base_url(
    field: &'static str,
    raw: &str,
) -> Result<Url, ConfigLoadError> {
    let url = Url::parse(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidUrl {
            field,
            value: raw.to_string(),
            source,
        }
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigLoadError::UnsupportedScheme {
            field,
            scheme: scheme.to_string(),
        }),
    }
}
