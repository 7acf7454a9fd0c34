use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("no API key has been provided")]
    MissingCredential,

    #[error("{0}")]
    Transport(String),

    #[error("API returned HTTP {status}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    /// Text shown to the user in place of a reply when an exchange fails.
    ///
    /// This is stored in the transcript as an ordinary assistant turn.
    pub fn user_message(&self) -> String {
        format!("Error: {self}. Please check your API key and try again.")
    }
}
