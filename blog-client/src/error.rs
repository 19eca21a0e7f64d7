use serde::Deserialize;
use thiserror::Error;

/// Everything a post operation can fail with. All variants are caught at
/// the operation boundary and surfaced as a failed UI state; none
/// propagate as panics, and nothing is retried automatically.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local pre-flight check failed; no request was issued.
    #[error("{0}")]
    Validation(String),
    /// The store answered 404 on get/update/delete.
    #[error("Post not found")]
    NotFound,
    /// Any other non-2xx answer. `message` is the server-supplied
    /// `{message}` when the body carries one, a status-derived fallback
    /// otherwise.
    #[error("HTTP error {status}: {message}")]
    Api { status: u16, message: String },
    /// The request could not be completed at all.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// A 2xx answer whose body does not match the Post schema.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl ClientError {
    /// The message a UI shows for this failure. For API errors that is the
    /// server-supplied message alone, without the status prefix.
    pub fn ui_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Classifies a non-2xx response. `missing_is_not_found` applies on
    /// get/update/delete, where a 404 means the post does not exist rather
    /// than a generic failure.
    pub(crate) async fn from_response(
        resp: reqwest::Response,
        missing_is_not_found: bool,
    ) -> Self {
        let status = resp.status();
        if missing_is_not_found && status == reqwest::StatusCode::NOT_FOUND {
            return ClientError::NotFound;
        }
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) if !body.message.trim().is_empty() => body.message,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
