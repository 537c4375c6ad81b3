use crate::config::ResolvedConfig;
use crate::constants::{OUTPUT_TYPE_SEARCH_RESULTS, SEARCH_PATH};
use crate::error::AppError;
use crate::parsing::parse_upstream_error_message;
use crate::types::{Depth, LinkupSearchBody};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

/// Minimal Linkup API client. Holds the resolved credentials for the life of
/// the process and performs exactly one HTTP request per search.
#[derive(Debug)]
pub struct LinkupClient {
    http: reqwest::Client,
    config: ResolvedConfig,
    search_url: url::Url,
}

impl LinkupClient {
    pub fn new(config: ResolvedConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("linkup-mcp/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| {
                AppError::Internal(format!("Failed to create HTTP client: {error}"))
            })?;

        let search_url = build_search_url(&config.base_url)?;

        Ok(Self {
            http,
            config,
            search_url,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    #[must_use]
    pub fn search_url(&self) -> &url::Url {
        &self.search_url
    }

    /// Runs a search with the `searchResults` output shape and returns the
    /// upstream `results` value untouched.
    pub async fn search(&self, query: &str, depth: Depth) -> Result<Value, AppError> {
        let body = LinkupSearchBody {
            q: query,
            depth,
            output_type: OUTPUT_TYPE_SEARCH_RESULTS,
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
            .map_err(|error| AppError::Internal(format!("Invalid API key header: {error}")))?;
        headers.insert(AUTHORIZATION, bearer);

        let response = self
            .http
            .post(self.search_url.clone())
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|error| AppError::Upstream(format!("Failed to call Linkup API: {error}")))?;

        let status = response.status().as_u16();
        let raw_body = response.text().await.map_err(|error| {
            AppError::Upstream(format!("Failed while reading response body: {error}"))
        })?;

        if !(200..300).contains(&status) {
            let fallback = format!("Request failed ({status}).");
            let detail = parse_upstream_error_message(&raw_body, &fallback);
            return Err(AppError::Upstream(format!(
                "Linkup API returned HTTP {status}: {detail}"
            )));
        }

        let mut payload = serde_json::from_str::<Value>(&raw_body)
            .map_err(|error| AppError::Upstream(format!("Invalid JSON response: {error}")))?;

        payload
            .get_mut("results")
            .map(Value::take)
            .ok_or_else(|| {
                AppError::Upstream("Linkup API response did not contain a results field".to_string())
            })
    }
}

fn build_search_url(base_url: &str) -> Result<url::Url, AppError> {
    let joined = format!("{}/{SEARCH_PATH}", base_url.trim_end_matches('/'));
    url::Url::parse(&joined)
        .map_err(|error| AppError::Internal(format!("Invalid search URL '{joined}': {error}")))
}
