use thiserror::Error;

/// Error type for the encryption service.
///
/// Decryption failures carry no cause breakdown: tampered data, a wrong
/// key, and a structurally invalid payload are indistinguishable to the
/// caller, and no partial plaintext ever escapes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncryptionError {
    #[error("Encryption key must decode to exactly 32 bytes")]
    InvalidKey,

    #[error("Failed to encrypt payload")]
    EncryptionFailed,

    #[error("Failed to decrypt payload")]
    DecryptionFailed,
}
