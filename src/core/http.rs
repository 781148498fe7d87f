use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::debug;

use crate::errors::UpstreamError;

/// Sends a single request and decodes the reply as JSON.
///
/// The body is decoded before the status is inspected, so a non-JSON reply
/// is a transport failure even when the status is an error.
///
/// # Errors
///
/// `UpstreamError::Transport` if the request fails or the body is not JSON,
/// `UpstreamError::Rejected` if the status is not 2xx.
pub async fn send_json(request: RequestBuilder) -> Result<Value, UpstreamError> {
    let response = request.send().await?;
    let status = response.status();
    let body: Value = response.json().await?;

    debug!(status = status.as_u16(), "Upstream replied");

    if !status.is_success() {
        return Err(UpstreamError::Rejected {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
