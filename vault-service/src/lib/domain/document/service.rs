use std::sync::Arc;

use crate::document::errors::DocumentError;
use crate::document::models::DocumentSummary;
use crate::document::models::StoredDocument;
use crate::encryption::EncryptionService;

/// Document vault backed by the encryption service.
///
/// Every payload passes through `encrypt` before it is stored and `decrypt`
/// on the way out; the vault never holds plaintext. Until a real object
/// store is wired in, the vault is seeded with sample documents at startup.
pub struct DocumentService {
    vault: Vec<StoredDocument>,
    encryption: Arc<EncryptionService>,
}

impl DocumentService {
    /// Build a vault seeded with sample documents.
    ///
    /// # Errors
    /// * `Encryption` - Sealing a sample payload failed
    pub fn with_sample_documents(
        encryption: Arc<EncryptionService>,
    ) -> Result<Self, DocumentError> {
        let samples: [(u32, &str, Vec<u8>); 2] = [
            (1, "confidential_report.pdf", vec![0x25; 2 * 1024]),
            (2, "cloud_access_keys.txt", vec![0x3D; 15 * 1024]),
        ];

        let mut vault = Vec::with_capacity(samples.len());
        for (id, name, plaintext) in samples {
            vault.push(StoredDocument {
                id,
                name: name.to_string(),
                ciphertext: encryption.encrypt(&plaintext)?,
            });
        }

        Ok(Self { vault, encryption })
    }

    /// List the vault's documents with their plaintext sizes.
    ///
    /// # Errors
    /// * `Encryption` - A stored payload failed its integrity check
    pub fn list(&self) -> Result<Vec<DocumentSummary>, DocumentError> {
        self.vault
            .iter()
            .map(|document| {
                let plaintext = self.encryption.decrypt(&document.ciphertext)?;
                Ok(DocumentSummary {
                    id: document.id,
                    name: document.name.clone(),
                    size: format_size(plaintext.len()),
                    encrypted: true,
                })
            })
            .collect()
    }
}

fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{}MB", bytes / MB)
    } else if bytes >= KB {
        format!("{}KB", bytes / KB)
    } else {
        format!("{}B", bytes)
    }
}
