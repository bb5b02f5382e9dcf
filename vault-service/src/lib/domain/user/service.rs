use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenService;

use crate::user::errors::AuthError;
use crate::user::models::AuthenticatedUser;
use crate::user::models::Credential;
use crate::user::models::IssuedToken;
use crate::user::models::RegisterCommand;
use crate::user::models::Username;
use crate::user::ports::CredentialStore;

/// Domain service for the authentication flow.
///
/// Coordinates the credential store, password hasher, and token service.
/// Holds only immutable, process-wide configuration; safe to share across
/// concurrent requests.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    password_hasher: PasswordHasher,
    token_service: Arc<TokenService>,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    pub fn new(store: Arc<CS>, token_service: Arc<TokenService>) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    /// * `DuplicateUser` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `Store` - Store operation failed
    pub async fn register(&self, command: RegisterCommand) -> Result<Username, AuthError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let credential = Credential::new(command.username.clone(), command.email, password_hash);

        if !self.store.insert_if_absent(credential).await? {
            return Err(AuthError::DuplicateUser(command.username.to_string()));
        }

        Ok(command.username)
    }

    /// Verify credentials and issue an access token.
    ///
    /// Unknown user, wrong password, and disabled account are all reported
    /// as `InvalidCredentials`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Credentials do not match an active account
    /// * `Token` - Token signing failed
    /// * `Store` - Store operation failed
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let username = Username::new(username.to_string())
            .map_err(|_| AuthError::InvalidCredentials)?;

        let credential = self
            .store
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if credential.disabled {
            return Err(AuthError::InvalidCredentials);
        }

        if !self
            .password_hasher
            .verify(password, &credential.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self
            .token_service
            .issue(username.as_str())
            .map_err(AuthError::Token)?;

        Ok(IssuedToken { access_token })
    }

    /// Turn a presented bearer token into an authenticated identity.
    ///
    /// Validates the signature and expiry, then re-checks the credential
    /// store: the subject must still exist and not be disabled. Every
    /// rejection collapses into `Unauthenticated`; only a store backend
    /// failure is surfaced separately.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token invalid, expired, malformed, or subject gone
    /// * `Store` - Store operation failed
    pub async fn authorize(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.token_service.validate(token).map_err(|e| {
            tracing::warn!(kind = %e, "Token rejected");
            AuthError::Unauthenticated
        })?;

        let username =
            Username::new(claims.sub).map_err(|_| AuthError::Unauthenticated)?;

        let credential = self
            .store
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        if credential.disabled {
            return Err(AuthError::Unauthenticated);
        }

        Ok(AuthenticatedUser {
            username: credential.username,
        })
    }
}
