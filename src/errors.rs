use axum::http::StatusCode;
use thiserror::Error;

/// Failure of one upstream fetch. Both kinds collapse into the single
/// `Error! HTTP Status: …` string the UI shows; nothing more granular is
/// surfaced past the fetch boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Non-2xx response. `text` is the canonical reason phrase of the code.
    #[error("Error! HTTP Status: {code} {text}")]
    HttpStatus { code: u16, text: String },
    /// Anything without a status line: connect, DNS, or body decode failure.
    #[error("Error! HTTP Status: {detail}")]
    Transport { detail: String },
}

impl FetchError {
    pub fn from_status(status: StatusCode) -> Self {
        FetchError::HttpStatus {
            code: status.as_u16(),
            text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::from_status(status),
            None => FetchError::Transport {
                detail: err.to_string(),
            },
        }
    }
}

/// Handler-boundary error; only bad requests reach clients, fetch failures
/// degrade to default data instead.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_format() {
        let err = FetchError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error! HTTP Status: 500 Internal Server Error");
    }

    #[test]
    fn not_found_message_format() {
        let err = FetchError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Error! HTTP Status: 404 Not Found");
    }

    #[test]
    fn transport_message_carries_detail() {
        let err = FetchError::Transport {
            detail: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Error! HTTP Status: connection refused");
    }
}
