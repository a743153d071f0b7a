use thiserror::Error;

/// Error types for the forecast client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Form input rejected before any request is made
    #[error("{0}")]
    Validation(String),

    /// The request never produced an HTTP response
    #[error("Permintaan gagal: {0}")]
    Transport(String),

    /// Non-OK HTTP status; `message` is the best message the body offered
    #[error("{message}")]
    Http { status: u16, message: String },

    /// OK response whose payload reports `status != "success"`
    #[error("{0}")]
    Rejected(String),

    /// Response body did not match the expected shape
    #[error("Respons server tidak valid: {0}")]
    Malformed(String),

    /// The charting library refused to draw
    #[error("Grafik gagal ditampilkan: {0}")]
    Render(String),
}

impl ClientError {
    /// Builds an HTTP error from a status code and an optional body message.
    pub fn http(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        ClientError::Http { status, message }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Malformed(error.to_string())
    }
}

/// Type alias for Result with ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
