use async_trait::async_trait;

use crate::user::errors::StoreError;
use crate::user::models::Credential;
use crate::user::models::Username;

/// Persistence operations for credential records.
///
/// The token and gate logic never touch a concrete store, so a persistent
/// backend can replace the in-memory one without changes elsewhere.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a credential record by username.
    ///
    /// # Returns
    /// Optional credential record (None if not found)
    ///
    /// # Errors
    /// * `Backend` - Store operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Credential>, StoreError>;

    /// Persist a new credential record unless the username is taken.
    ///
    /// # Returns
    /// True if the record was inserted, false if the username already exists
    ///
    /// # Errors
    /// * `Backend` - Store operation failed
    async fn insert_if_absent(&self, credential: Credential) -> Result<bool, StoreError>;
}
