use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Password hashing failed")]
    HashingError,
    #[error("Password verification failed")]
    VerificationError,
    #[error("Token creation failed")]
    TokenCreationError,
    #[error("Invalid token credentials provided.")]
    InvalidToken,
    #[error("Authentication is not configured: {0}")]
    Misconfigured(String),
}
