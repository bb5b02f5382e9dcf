//! Authentication primitives for the document vault.
//!
//! Provides the two security-sensitive building blocks the service is made of:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and validation (HMAC-signed JWT)
//!
//! The service crate owns the credential store and the login/registration
//! flows; this crate stays free of HTTP and storage concerns so the same
//! primitives can back any transport.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//! use jsonwebtoken::Algorithm;
//!
//! let tokens = TokenService::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Algorithm::HS256,
//!     Duration::minutes(30),
//! );
//! let token = tokens.issue("alice").unwrap();
//! let claims = tokens.validate(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
