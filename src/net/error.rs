//! Errors returned by REST helpers.

/// Failure talking to the backend API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Short message suitable for a form status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Status(401 | 403) => "Invalid email or password.",
            Self::Status(404) => "Not found.",
            Self::Status(422) => "The server rejected these values.",
            Self::Network(_) | Self::Unavailable => "Could not reach the server.",
            Self::Status(_) | Self::Decode(_) => "Something went wrong. Try again.",
        }
    }
}
