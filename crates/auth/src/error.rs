use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing configuration: {0}")]
    Config(String),

    #[error("failed to fetch JWKS document: {0}")]
    Jwks(String),

    #[error("token signed with unknown key id: {0}")]
    UnknownKey(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("missing required claim: {0}")]
    MissingClaim(&'static str),
}

/// Result type for token verification.
pub type Result<T> = std::result::Result<T, AuthError>;
