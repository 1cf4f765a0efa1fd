use contracts::shared::api_error::ApiErrorBody;
use thiserror::Error;

/// Failure of a single request against the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, connection reset, ...).
    #[error("Failed to send request: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the `error` field of the body when the
    /// body was structured.
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },

    /// 2xx response whose body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Server {
            status,
            message: ApiErrorBody::message_from(body),
        }
    }

    /// Text shown to the user in an error notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Server {
                status,
                message: None,
            } => format!("Request failed with status {}", status),
            Self::Network(reason) => reason.clone(),
            Self::Decode(reason) => format!("Unexpected response: {}", reason),
        }
    }
}
