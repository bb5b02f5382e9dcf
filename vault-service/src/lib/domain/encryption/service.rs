use chacha20poly1305::aead::Aead;
use chacha20poly1305::aead::AeadCore;
use chacha20poly1305::aead::KeyInit;
use chacha20poly1305::aead::OsRng;
use chacha20poly1305::ChaCha20Poly1305;
use chacha20poly1305::Key;
use chacha20poly1305::Nonce;

use crate::encryption::errors::EncryptionError;
use crate::encryption::models::EncryptionKey;

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Authenticated encryption for document payloads.
///
/// ChaCha20-Poly1305 under a single process-wide key. Payloads are laid out
/// as `nonce || ciphertext || tag`; the nonce is drawn fresh from the OS
/// random source on every call, so encrypting identical plaintexts twice
/// yields different outputs.
pub struct EncryptionService {
    cipher: ChaCha20Poly1305,
}

impl EncryptionService {
    pub fn new(key: &EncryptionKey) -> Self {
        Self {
            cipher: ChaCha20Poly1305::new(Key::from_slice(key.as_bytes())),
        }
    }

    /// Encrypt an opaque byte payload.
    ///
    /// Empty and multi-megabyte payloads are handled alike; the output is
    /// always `plaintext.len() + 28` bytes.
    ///
    /// # Errors
    /// * `EncryptionFailed` - Cipher operation failed
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, EncryptionError> {
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);

        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| EncryptionError::EncryptionFailed)?;

        let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(nonce.as_slice());
        payload.extend_from_slice(&ciphertext);

        Ok(payload)
    }

    /// Decrypt a payload produced by [`EncryptionService::encrypt`].
    ///
    /// # Errors
    /// * `DecryptionFailed` - Integrity tag does not verify (tampered or
    ///   corrupted data), the payload was produced under a different key,
    ///   or the payload is structurally invalid
    pub fn decrypt(&self, payload: &[u8]) -> Result<Vec<u8>, EncryptionError> {
        if payload.len() < NONCE_LEN + TAG_LEN {
            return Err(EncryptionError::DecryptionFailed);
        }

        let (nonce_bytes, ciphertext) = payload.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| EncryptionError::DecryptionFailed)
    }
}
