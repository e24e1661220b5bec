//! Error types for token operations.
//! Used by: token, service, config.

/// The only error callers ever see. The cause is logged, never returned.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("failed to authenticate token")]
    Authentication,
}

/// What actually went wrong inside sign or verify.
#[derive(Debug, thiserror::Error)]
pub enum Cause {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("payload already has an \"exp\" claim")]
    ReservedClaim,

    #[error("\"iat\" claim must be an integer timestamp")]
    InvalidIssuedAt,

    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl Cause {
    /// Logs the cause and collapses it into the opaque caller error.
    pub fn into_error(self) -> Error {
        tracing::error!(error = %self, "failed to authenticate token");
        Error::Authentication
    }
}

impl From<Cause> for Error {
    fn from(cause: Cause) -> Self {
        cause.into_error()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
