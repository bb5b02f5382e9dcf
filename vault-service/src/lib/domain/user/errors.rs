use auth::PasswordError;
use auth::TokenError;
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

/// Error for credential store operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Credential store backend failed: {0}")]
    Backend(String),
}

/// Top-level error for authentication operations.
///
/// `InvalidCredentials` deliberately covers unknown user, wrong password,
/// and disabled account alike so a caller cannot enumerate usernames.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Username already registered: {0}")]
    DuplicateUser(String),

    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(TokenError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
