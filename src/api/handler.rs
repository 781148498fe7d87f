//! API Lambda handler - thin router that delegates to the endpoint handlers.
//!
//! This module handles:
//! - Normalizing the incoming event (delegated to `request`)
//! - Path routing to `summarize`, `transcribe_start` and `transcribe_status`
//! - Rendering handler errors into proxy results

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::request::ApiRequest;
use super::state::AppState;
use super::{summarize, transcribe_start, transcribe_status};
use crate::errors::ApiError;

pub use self::function_handler as handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Summarize,
    TranscribeStart,
    TranscribeStatus,
}

impl Route {
    /// Matches on the path suffix so stage prefixes like `/prod/api` are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path.ends_with("/summarize") {
            Some(Route::Summarize)
        } else if path.ends_with("/transcribe/start") || path.ends_with("/transcribe_start") {
            Some(Route::TranscribeStart)
        } else if path.ends_with("/transcribe/status") || path.ends_with("/transcribe_status") {
            Some(Route::TranscribeStatus)
        } else {
            None
        }
    }
}

/// Lambda handler for the API entrypoint.
///
/// Never fails the invocation for request-level problems; those become
/// error responses.
///
/// # Errors
///
/// Reserved for runtime-level failures; currently always returns `Ok`.
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let request = ApiRequest::from_event(&event.payload);
    let span = info_span!(
        "api_request",
        request_id = %Uuid::new_v4(),
        lambda_request_id = %event.context.request_id,
        method = %request.method,
        path = %request.path,
    );

    Ok(route(state, &request).instrument(span).await)
}

/// Dispatches `request` and renders the outcome into a proxy result.
pub async fn route(state: &AppState, request: &ApiRequest) -> Value {
    info!("API Lambda received request");

    let outcome = match Route::from_path(&request.path) {
        Some(Route::Summarize) => summarize::handle(state, request).await,
        Some(Route::TranscribeStart) => transcribe_start::handle(state, request).await,
        Some(Route::TranscribeStatus) => transcribe_status::handle(state, request).await,
        None => Err(ApiError::NotFound),
    };

    match outcome {
        Ok(response) => {
            info!("Request handled successfully");
            response
        }
        Err(err) => {
            log_rejection(&err);
            err.into_response()
        }
    }
}

fn log_rejection(err: &ApiError) {
    match err {
        ApiError::UpstreamRejected { status, .. } => {
            error!(upstream_status = *status, "{}", err);
        }
        ApiError::Transport { details, .. } => {
            error!(details = %details, "{}", err);
        }
        ApiError::MissingCredential(_) => error!("{}", err),
        _ => info!(status = err.status_code(), "Rejected request: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_path_suffix() {
        assert_eq!(Route::from_path("/api/summarize"), Some(Route::Summarize));
        assert_eq!(Route::from_path("/prod/summarize/"), Some(Route::Summarize));
        assert_eq!(
            Route::from_path("/api/transcribe/start"),
            Some(Route::TranscribeStart)
        );
        assert_eq!(
            Route::from_path("/api/transcribe_start"),
            Some(Route::TranscribeStart)
        );
        assert_eq!(
            Route::from_path("/transcribe/status"),
            Some(Route::TranscribeStatus)
        );
        assert_eq!(
            Route::from_path("/api/transcribe_status"),
            Some(Route::TranscribeStatus)
        );
    }

    #[test]
    fn unknown_paths_do_not_route() {
        assert_eq!(Route::from_path(""), None);
        assert_eq!(Route::from_path("/"), None);
        assert_eq!(Route::from_path("/api/summarizer"), None);
        assert_eq!(Route::from_path("/api/transcribe"), None);
    }
}
