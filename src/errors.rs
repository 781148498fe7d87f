use reqwest::Method;
use serde_json::{Value, json};
use thiserror::Error;

use crate::api::helpers;

/// Failure talking to an upstream provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced a usable JSON reply.
    #[error("{0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("upstream returned status {status}")]
    Rejected { status: u16, body: Value },
}

impl From<reqwest::Error> for UpstreamError {
    fn from(error: reqwest::Error) -> Self {
        UpstreamError::Transport(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed. Use {allowed}.")]
    MethodNotAllowed { allowed: Method },

    #[error("Missing {0} environment variable.")]
    MissingCredential(&'static str),

    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("{message}")]
    UpstreamRejected {
        status: u16,
        message: &'static str,
        details: Value,
    },

    #[error("{message}")]
    Transport {
        message: &'static str,
        details: String,
    },

    #[error("Not found.")]
    NotFound,
}

impl ApiError {
    /// Maps an upstream failure onto this service's envelope using the
    /// handler's own wording for each case.
    #[must_use]
    pub fn from_upstream(
        error: UpstreamError,
        rejected_message: &'static str,
        transport_message: &'static str,
    ) -> Self {
        match error {
            UpstreamError::Rejected { status, body } => ApiError::UpstreamRejected {
                status,
                message: rejected_message,
                details: body,
            },
            UpstreamError::Transport(details) => ApiError::Transport {
                message: transport_message,
                details,
            },
        }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MethodNotAllowed { .. } => 405,
            ApiError::MissingCredential(_) | ApiError::Transport { .. } => 500,
            ApiError::InvalidInput(_) => 400,
            ApiError::UpstreamRejected { status, .. } => *status,
            ApiError::NotFound => 404,
        }
    }

    /// JSON body: `{error}` plus `details` for upstream failures.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            ApiError::UpstreamRejected { details, .. } => {
                json!({ "error": self.to_string(), "details": details })
            }
            ApiError::Transport { details, .. } => {
                json!({ "error": self.to_string(), "details": details })
            }
            _ => json!({ "error": self.to_string() }),
        }
    }

    /// Renders the error as an API Gateway proxy result.
    #[must_use]
    pub fn into_response(self) -> Value {
        helpers::json_response(self.status_code(), &self.body())
    }
}
