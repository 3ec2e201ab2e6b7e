use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Why a single admin action did not go through.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Input rejected before anything was sent.
    #[error("could not decode input: {0}")]
    Decode(String),

    #[error("request rejected by the activities API")]
    Rejected,

    #[error("no activity with the provided id")]
    NotFound,

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("could not parse response body: {0}")]
    Body(String),
}

impl ActionError {
    pub fn sent_request(&self) -> bool {
        !matches!(self, ActionError::Decode(_))
    }
}

/// Why an uploaded import file could not be read.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("not a multipart upload: {0}")]
    NotMultipart(#[from] MultipartRejection),

    #[error("malformed multipart body: {0}")]
    Malformed(#[from] MultipartError),

    #[error("no file field in the upload")]
    MissingFile,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid activities API url {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn app_error_keeps_status() {
        let response = AppError::not_found("unknown panel").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn decode_errors_never_reach_the_network() {
        assert!(!ActionError::Decode("bad".into()).sent_request());
        assert!(ActionError::Rejected.sent_request());
        assert!(ActionError::NotFound.sent_request());
        assert_eq!(
            ActionError::NotFound.to_string(),
            "no activity with the provided id"
        );
    }
}
