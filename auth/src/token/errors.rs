use thiserror::Error;

/// Error type for token operations.
///
/// The three validation kinds are deliberately distinguishable so the
/// service can log which check failed, even though callers reject all of
/// them the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed")]
    Malformed,
}
