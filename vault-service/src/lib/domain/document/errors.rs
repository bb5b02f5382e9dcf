use thiserror::Error;

use crate::encryption::EncryptionError;

/// Error type for document operations.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    #[error("Document encryption error: {0}")]
    Encryption(#[from] EncryptionError),
}
