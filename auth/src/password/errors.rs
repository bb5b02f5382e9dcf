use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error path: mismatches and malformed hashes are both
/// reported as a plain `false` by `PasswordHasher::verify`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
