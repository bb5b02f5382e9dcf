use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::user::errors::StoreError;
use crate::user::models::Credential;
use crate::user::models::Username;
use crate::user::ports::CredentialStore;

/// In-memory credential store.
///
/// Stand-in for a persistent backend; everything is lost on restart. The
/// map is keyed by username, the record's immutable primary key.
pub struct InMemoryCredentialStore {
    credentials: RwLock<HashMap<String, Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            credentials: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, StoreError> {
        let credentials = self.credentials.read().await;
        Ok(credentials.get(username.as_str()).cloned())
    }

    async fn insert_if_absent(&self, credential: Credential) -> Result<bool, StoreError> {
        let mut credentials = self.credentials.write().await;

        match credentials.entry(credential.username.as_str().to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(credential);
                Ok(true)
            }
        }
    }
}
