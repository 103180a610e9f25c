use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for user and authentication operations.
///
/// Each user-facing kind carries a fixed display string, so a transport
/// layer renders the same text for a given failure no matter which flow
/// produced it.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Domain-level errors
    #[error("User does not exist.")]
    NotFound,

    #[error("Sorry. That email already exists.")]
    EmailAlreadyExists,

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Invalid token. Please log in again.")]
    InvalidToken,

    #[error("Signature expired. Please log in again.")]
    ExpiredToken,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<auth::TokenError> for UserError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::Expired => UserError::ExpiredToken,
            auth::TokenError::Invalid(_) => UserError::InvalidToken,
            // Encoding can only fail on key/serialization trouble, which is
            // an internal fault rather than a caller mistake.
            auth::TokenError::EncodingFailed(msg) => UserError::Unknown(msg),
        }
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        UserError::Unknown(err.to_string())
    }
}
