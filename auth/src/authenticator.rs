use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::session::Clock;
use crate::session::CredentialError;
use crate::session::IssuedToken;
use crate::session::SessionStore;

/// Authentication coordinator combining password verification and session
/// token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    sessions: SessionStore,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Create an authenticator whose sessions live for `session_ttl`.
    pub fn new(session_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            sessions: SessionStore::new(session_ttl),
        }
    }

    /// Create an authenticator with an injected clock, for tests.
    pub fn with_clock(session_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            sessions: SessionStore::with_clock(session_ttl, clock),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - User the session will belong to
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be verified
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: Uuid,
    ) -> Result<IssuedToken, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.sessions.issue(user_id))
    }

    /// Resolve a credential header value to the owning user id.
    ///
    /// # Errors
    /// * `CredentialError` - Credential is malformed, uses an unsupported
    ///   scheme, or the token is unknown or expired
    pub fn authorize(&self, credential: &str) -> Result<Uuid, CredentialError> {
        self.sessions.validate(credential)
    }

    /// Revoke a session token. Idempotent.
    pub fn revoke(&self, token: &str) {
        self.sessions.revoke(token)
    }
}
