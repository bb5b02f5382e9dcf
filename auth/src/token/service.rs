use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates signed, time-limited access tokens.
///
/// Holds the shared signing secret, the HMAC algorithm, and the default
/// token lifetime. All fields are immutable after construction, so a single
/// instance is safely shared across concurrent requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret (at least 32 bytes for HS256)
    /// * `algorithm` - HMAC signing algorithm (HS256/HS384/HS512)
    /// * `default_ttl` - Lifetime applied by [`TokenService::issue`]
    pub fn new(secret: &[u8], algorithm: Algorithm, default_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            default_ttl,
        }
    }

    /// Issue a token for `subject` with the configured default lifetime.
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_with_ttl(subject, self.default_ttl)
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::for_subject(subject, ttl);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Decode a token and verify its signature and expiry.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not verify under the secret
    /// * `Expired` - Current time is at or past the embedded expiry
    /// * `Malformed` - The string is not structurally a token
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(
            b"test_secret_key_at_least_32_bytes!",
            Algorithm::HS256,
            Duration::minutes(30),
        )
    }

    #[test]
    fn test_issue_and_validate() {
        let tokens = service();

        let token = tokens.issue("alice").expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = tokens.validate(&token).expect("Failed to validate token");
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_validate_expired_token() {
        let tokens = service();

        // Well past the decoder's clock-skew leeway
        let token = tokens
            .issue_with_ttl("alice", Duration::minutes(-5))
            .expect("Failed to issue token");

        assert_eq!(tokens.validate(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_validate_malformed_token() {
        let tokens = service();

        assert_eq!(
            tokens.validate("not.a.token"),
            Err(TokenError::Malformed)
        );
        assert_eq!(tokens.validate(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let issuer = TokenService::new(
            b"secret1_at_least_32_bytes_long_key!",
            Algorithm::HS256,
            Duration::minutes(30),
        );
        let validator = TokenService::new(
            b"secret2_at_least_32_bytes_long_key!",
            Algorithm::HS256,
            Duration::minutes(30),
        );

        let token = issuer.issue("alice").expect("Failed to issue token");

        assert_eq!(
            validator.validate(&token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_validate_tampered_token() {
        let tokens = service();
        let token = tokens.issue("alice").expect("Failed to issue token");

        // Flip a character in the payload segment
        let mut tampered = token.into_bytes();
        let dot = tampered.iter().position(|&b| b == b'.').unwrap();
        tampered[dot + 1] = if tampered[dot + 1] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(tokens.validate(&tampered).is_err());
    }
}
