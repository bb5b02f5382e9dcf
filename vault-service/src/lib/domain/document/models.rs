use serde::Serialize;

/// A document held in the vault, encrypted at rest.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: u32,
    pub name: String,
    /// AEAD payload produced by the encryption service
    pub ciphertext: Vec<u8>,
}

/// Listing entry for a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub id: u32,
    pub name: String,
    /// Human-readable plaintext size, e.g. "15KB"
    pub size: String,
    pub encrypted: bool,
}
