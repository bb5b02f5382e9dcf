use base64::engine::general_purpose;
use base64::Engine as _;

use crate::encryption::errors::EncryptionError;

/// Process-wide symmetric document key.
///
/// Loaded once at startup from configuration; never regenerated or rotated
/// at runtime. Losing it makes previously encrypted payloads unrecoverable.
#[derive(Clone)]
pub struct EncryptionKey([u8; 32]);

impl EncryptionKey {
    /// Parse key material from its configured representation.
    ///
    /// Accepts 64 hex characters, URL-safe or standard base64 (padded or
    /// not), or the raw 32 bytes verbatim.
    ///
    /// # Errors
    /// * `InvalidKey` - Input does not decode to exactly 32 bytes
    pub fn parse(raw: &str) -> Result<Self, EncryptionError> {
        let trimmed = raw.trim();

        if trimmed.len() == 64 && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            if let Some(bytes) = decode_hex(trimmed) {
                return Self::from_bytes(&bytes);
            }
        }

        for engine in [
            &general_purpose::URL_SAFE,
            &general_purpose::URL_SAFE_NO_PAD,
            &general_purpose::STANDARD,
            &general_purpose::STANDARD_NO_PAD,
        ] {
            if let Ok(bytes) = engine.decode(trimmed) {
                if bytes.len() == 32 {
                    return Self::from_bytes(&bytes);
                }
            }
        }

        Self::from_bytes(trimmed.as_bytes())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, EncryptionError> {
        bytes
            .try_into()
            .map(EncryptionKey)
            .map_err(|_| EncryptionError::InvalidKey)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

fn decode_hex(input: &str) -> Option<Vec<u8>> {
    if input.len() % 2 != 0 {
        return None;
    }

    let mut bytes = Vec::with_capacity(input.len() / 2);
    let mut chars = input.chars();
    while let (Some(h), Some(l)) = (chars.next(), chars.next()) {
        let hi = h.to_digit(16)?;
        let lo = l.to_digit(16)?;
        bytes.push(((hi << 4) | lo) as u8);
    }
    Some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_BYTES: [u8; 32] = [7u8; 32];

    #[test]
    fn test_parse_hex() {
        let hex: String = KEY_BYTES.iter().map(|b| format!("{:02x}", b)).collect();
        let key = EncryptionKey::parse(&hex).unwrap();
        assert_eq!(key.as_bytes(), &KEY_BYTES);
    }

    #[test]
    fn test_parse_base64_variants() {
        let standard = general_purpose::STANDARD.encode(KEY_BYTES);
        let url_safe = general_purpose::URL_SAFE.encode(KEY_BYTES);
        let url_safe_no_pad = general_purpose::URL_SAFE_NO_PAD.encode(KEY_BYTES);

        for encoded in [standard, url_safe, url_safe_no_pad] {
            let key = EncryptionKey::parse(&encoded).unwrap();
            assert_eq!(key.as_bytes(), &KEY_BYTES);
        }
    }

    #[test]
    fn test_parse_raw_bytes() {
        let raw = "0123456789abcdefghijklmnopqrstuv";
        let key = EncryptionKey::parse(raw).unwrap();
        assert_eq!(key.as_bytes(), raw.as_bytes());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!(
            EncryptionKey::parse("too-short"),
            Err(EncryptionError::InvalidKey)
        ));
        assert!(matches!(
            EncryptionKey::parse(&general_purpose::STANDARD.encode([1u8; 16])),
            Err(EncryptionError::InvalidKey)
        ));
    }
}
