use crate::constants::{
    ERROR_INVALID_BASE_URL, ERROR_MISSING_API_KEY, INVALID_BASE_URL_MESSAGE,
    MISSING_API_KEY_MESSAGE,
};

/// Startup configuration failures. The display strings are part of the
/// user-facing contract and must not be reworded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey,
    #[error("{}", INVALID_BASE_URL_MESSAGE)]
    InvalidBaseUrl { value: String },
}

impl ConfigError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => ERROR_MISSING_API_KEY,
            Self::InvalidBaseUrl { .. } => ERROR_INVALID_BASE_URL,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Cli(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message without the kind prefix, as shown to users and agents.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(error) => error.to_string(),
            Self::Cli(message)
            | Self::InvalidArgument(message)
            | Self::Upstream(message)
            | Self::Internal(message) => message.clone(),
        }
    }

    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

impl From<clap::Error> for AppError {
    fn from(error: clap::Error) -> Self {
        Self::Cli(error.to_string().trim_end().to_string())
    }
}
