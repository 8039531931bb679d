//! Typed HTTP response envelope.
//!
//! Every request produces an `ApiResponse` carrying the HTTP status and the
//! decoded JSON body when one was present. Callers branch on the explicit
//! status helpers instead of probing the raw envelope for a key.

use serde_json::Value;

use pb_core::error::{PbError, PbResult};

/// Result of one API round trip: HTTP status plus optional decoded JSON body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body, if the response carried one.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Create a response envelope.
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the status is exactly 200.
    ///
    /// Delete-style operations reduce their outcome to this check; any other
    /// status (404, 500, even 204) counts as failure.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Unwrap the decoded JSON body.
    ///
    /// Non-2xx statuses become [`PbError::RemoteRejected`] with the body text
    /// attached for diagnostics; a 2xx response without a JSON body becomes
    /// [`PbError::UnexpectedResponse`].
    pub fn into_body(self) -> PbResult<Value> {
        if !self.is_ok() {
            let message = self
                .body
                .map(|b| b.to_string())
                .unwrap_or_else(|| "<no body>".to_string());
            return Err(PbError::RemoteRejected {
                status: self.status,
                message,
            });
        }
        self.body.ok_or_else(|| {
            PbError::UnexpectedResponse(format!(
                "expected a JSON body with status {}",
                self.status
            ))
        })
    }
}
