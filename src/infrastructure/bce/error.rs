//! BCE client errors

use serde::Deserialize;
use thiserror::Error;

use crate::domain::ports::ProviderError;

/// Error returned by the BCE HTTP client
#[derive(Debug, Error)]
pub enum BceError {
    #[error("invalid endpoint {0:?}")]
    InvalidEndpoint(String),

    #[error("failed to sign request: {0}")]
    Signing(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{code}: {message} (status {status}, request {request_id})")]
    Service {
        status: u16,
        code: String,
        message: String,
        request_id: String,
    },

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Error document returned with non-2xx responses
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ErrorBody {
    pub request_id: String,
    pub code: String,
    pub message: String,
}

impl BceError {
    /// Build a service error from a status and raw body.
    ///
    /// Bodies that are not a BCE error document keep the raw text as the message.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(doc) if !doc.code.is_empty() || !doc.message.is_empty() => BceError::Service {
                status,
                code: doc.code,
                message: doc.message,
                request_id: doc.request_id,
            },
            _ => BceError::Service {
                status,
                code: reason.unwrap_or("HttpError").replace(' ', ""),
                message: body.trim().to_string(),
                request_id: String::new(),
            },
        }
    }
}

impl From<BceError> for ProviderError {
    fn from(err: BceError) -> Self {
        match err {
            BceError::Service {
                status,
                code,
                message,
                request_id,
            } => ProviderError::Service {
                status,
                code,
                message,
                request_id,
            },
            BceError::Decode(message) => ProviderError::Decode(message),
            other => ProviderError::Transport(other.to_string()),
        }
    }
}
