use crate::constants::{DEFAULT_API_BASE_URL, ENV_LINKUP_API_BASE_URL, ENV_LINKUP_API_KEY};
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

/// Option bag produced by CLI parsing. Deserializing from a JSON object ignores
/// keys it does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Snapshot of the environment variables resolution may consult.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentView {
    vars: HashMap<String, String>,
}

impl EnvironmentView {
    #[must_use]
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the value of `name`, treating an empty string as unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentView
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub base_url: String,
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueSource {
    Argument,
    Environment,
    Default,
}

impl ValueSource {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Argument => "argument",
            Self::Environment => "environment",
            Self::Default => "default",
        }
    }
}

/// Resolves the API key and base URL from `raw`, then `env`, then defaults.
///
/// Fields are checked in declaration order and the first failure is returned,
/// so a missing API key is reported even when the base URL is also invalid.
pub fn resolve(raw: &RawOptions, env: &EnvironmentView) -> Result<ResolvedConfig, ConfigError> {
    let (api_key, key_source) = resolve_api_key(raw, env)?;
    let (base_url, url_source) = resolve_base_url(raw, env);
    validate_base_url(&base_url)?;

    tracing::debug!(
        api_key_source = key_source.as_str(),
        base_url_source = url_source.as_str(),
        base_url = %base_url,
        "resolved configuration"
    );

    Ok(ResolvedConfig { api_key, base_url })
}

fn resolve_api_key(
    raw: &RawOptions,
    env: &EnvironmentView,
) -> Result<(String, ValueSource), ConfigError> {
    if let Some(value) = raw.api_key.as_deref()
        && !value.is_empty()
    {
        return Ok((value.to_string(), ValueSource::Argument));
    }

    if let Some(value) = env.get(ENV_LINKUP_API_KEY) {
        return Ok((value.to_string(), ValueSource::Environment));
    }

    Err(ConfigError::MissingApiKey)
}

fn resolve_base_url(raw: &RawOptions, env: &EnvironmentView) -> (String, ValueSource) {
    if let Some(value) = &raw.base_url {
        return (value.clone(), ValueSource::Argument);
    }
    if let Some(value) = env.get(ENV_LINKUP_API_BASE_URL) {
        return (value.to_string(), ValueSource::Environment);
    }
    (DEFAULT_API_BASE_URL.to_string(), ValueSource::Default)
}

/// Accepts absolute URLs with a host, e.g. `https://api.linkup.so/v1`.
pub fn validate_base_url(value: &str) -> Result<(), ConfigError> {
    match url::Url::parse(value) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        _ => Err(ConfigError::InvalidBaseUrl {
            value: value.to_string(),
        }),
    }
}
