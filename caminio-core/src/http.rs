use async_trait::async_trait;
use caminio_config::{ApiConfig, HttpConfig};
use caminio_contracts::{FetchError, JsonSource};
use caminio_model::Conditions;
use reqwest::{Client, header};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;

/// GET-only JSON client bound to one caminio host.
#[derive(Clone)]
pub struct HttpJsonClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl std::fmt::Debug for HttpJsonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpJsonClient")
            .field("api_base", &self.api_base)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

impl HttpJsonClient {
    pub fn new(api: &ApiConfig, http: &HttpConfig) -> Result<Self> {
        let client = Client::builder().timeout(http.timeout).build()?;
        let api_base = api.api_base();

        info!("[HttpJsonClient] Creating client with API base: {}", api_base);

        Ok(Self {
            client,
            api_base,
            api_key: api.api_key.clone(),
        })
    }

    /// Joins a collection path onto the API base.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.api_base, p.trim_start_matches('/'))
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[async_trait]
impl JsonSource for HttpJsonClient {
    async fn get_json(
        &self,
        path: &str,
        query: &Conditions,
    ) -> std::result::Result<Value, FetchError> {
        let url = self.build_url(path);
        debug!(%url, conditions = query.len(), "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, format!("API-KEY {}", self.api_key))
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                url: url.clone(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| FetchError::Decode {
                url,
                message: err.to_string(),
            })
    }
}
