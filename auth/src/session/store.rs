use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use uuid::Uuid;

use super::clock::Clock;
use super::clock::SystemClock;
use super::errors::CredentialError;

const BEARER_SCHEME: &str = "bearer";

/// In-memory bearer-token session store.
///
/// Issues opaque random tokens bound to a user id and an expiration instant,
/// validates them per request, and supports administrative revocation.
/// Expired entries are evicted lazily when the token is next presented;
/// there is no background sweep, so a token that is never revalidated stays
/// in the table until the process exits.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Clone)]
struct Session {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
}

/// Token returned by a successful issue operation.
///
/// Carries the expiration instant so callers can mirror the session
/// administratively without re-deriving the TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionStore {
    /// Create a store with the given time-to-live, using the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a store with an injected clock, for tests.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Issue a new session token for a user.
    ///
    /// The token is a random UUID v4; the identifier space is large enough
    /// that no collision check is performed. If the generator is ever
    /// replaced with one offering weaker guarantees, an explicit uniqueness
    /// check must be added here.
    pub fn issue(&self, user_id: Uuid) -> IssuedToken {
        let token = Uuid::new_v4().to_string();
        let expires_at = self.clock.now() + self.ttl;

        self.table().insert(
            token.clone(),
            Session {
                user_id,
                expires_at,
            },
        );

        IssuedToken { token, expires_at }
    }

    /// Validate a full credential header value (`"<scheme> <token>"`).
    ///
    /// # Errors
    /// * `MalformedCredential` - Value does not split into exactly two parts
    /// * `UnsupportedScheme` - Scheme is not `bearer` (case-insensitive)
    /// * `UnknownToken` - Token is not in the active set
    /// * `ExpiredToken` - Token is past its expiration; it is removed from
    ///   the active set as a side effect
    pub fn validate(&self, credential: &str) -> Result<Uuid, CredentialError> {
        let (scheme, token) = split_credential(credential)?;

        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return Err(CredentialError::UnsupportedScheme(scheme.to_string()));
        }

        self.validate_token(token)
    }

    /// Validate a bare token against the active set.
    ///
    /// # Errors
    /// * `UnknownToken` - Token is not in the active set
    /// * `ExpiredToken` - Token is past its expiration (evicted on this path)
    pub fn validate_token(&self, token: &str) -> Result<Uuid, CredentialError> {
        let mut sessions = self.table();

        let session = sessions.get(token).ok_or(CredentialError::UnknownToken)?;

        if self.clock.now() > session.expires_at {
            sessions.remove(token);
            return Err(CredentialError::ExpiredToken);
        }

        Ok(session.user_id)
    }

    /// Revoke a token before its natural expiry.
    ///
    /// Idempotent: revoking an unknown or already-revoked token is not an
    /// error. The caller is responsible for checking that the requester is
    /// an administrator.
    pub fn revoke(&self, token: &str) {
        self.table().remove(token);
    }

    // A poisoned lock only means another request panicked mid-operation;
    // every operation on the table is idempotent, so recover the guard.
    fn table(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn split_credential(credential: &str) -> Result<(&str, &str), CredentialError> {
    let mut parts = credential.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) => Ok((scheme, token)),
        _ => Err(CredentialError::MalformedCredential),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Manually advanced clock for exercising expiry without sleeping.
    struct FakeClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl FakeClock {
        fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(start),
            }
        }

        fn advance(&self, delta: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += delta;
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    fn store_with_fake_clock(ttl_minutes: i64) -> (SessionStore, Arc<FakeClock>) {
        let clock = Arc::new(FakeClock::new(Utc::now()));
        let store = SessionStore::with_clock(Duration::minutes(ttl_minutes), clock.clone());
        (store, clock)
    }

    #[test]
    fn test_validate_after_issue_returns_same_user() {
        let (store, _clock) = store_with_fake_clock(30);

        let user_id = Uuid::new_v4();
        let issued = store.issue(user_id);

        let resolved = store
            .validate(&format!("Bearer {}", issued.token))
            .expect("freshly issued token should validate");
        assert_eq!(resolved, user_id);
    }

    #[test]
    fn test_issued_token_carries_ttl_expiration() {
        let (store, clock) = store_with_fake_clock(30);

        let issued = store.issue(Uuid::new_v4());
        assert_eq!(issued.expires_at, clock.now() + Duration::minutes(30));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let (store, _clock) = store_with_fake_clock(30);

        let user_id = Uuid::new_v4();
        let issued = store.issue(user_id);

        for scheme in ["bearer", "Bearer", "BEARER"] {
            let resolved = store
                .validate(&format!("{} {}", scheme, issued.token))
                .expect("bearer scheme should be accepted in any casing");
            assert_eq!(resolved, user_id);
        }
    }

    #[test]
    fn test_expired_token_then_unknown() {
        let (store, clock) = store_with_fake_clock(30);

        let issued = store.issue(Uuid::new_v4());
        clock.advance(Duration::minutes(31));

        // First validation detects the expiry and evicts the entry.
        let first = store.validate_token(&issued.token);
        assert_eq!(first, Err(CredentialError::ExpiredToken));

        // The entry is gone, so the same token now reads as unknown.
        let second = store.validate_token(&issued.token);
        assert_eq!(second, Err(CredentialError::UnknownToken));
    }

    #[test]
    fn test_token_valid_until_expiration_instant() {
        let (store, clock) = store_with_fake_clock(30);

        let user_id = Uuid::new_v4();
        let issued = store.issue(user_id);

        // Exactly at the expiration instant the token is still accepted;
        // only strictly past it does validation fail.
        clock.advance(Duration::minutes(30));
        assert_eq!(store.validate_token(&issued.token), Ok(user_id));

        clock.advance(Duration::seconds(1));
        assert_eq!(
            store.validate_token(&issued.token),
            Err(CredentialError::ExpiredToken)
        );
    }

    #[test]
    fn test_unsupported_scheme() {
        let (store, _clock) = store_with_fake_clock(30);

        let issued = store.issue(Uuid::new_v4());

        // A valid token behind the wrong scheme is still rejected.
        let result = store.validate(&format!("Basic {}", issued.token));
        assert_eq!(
            result,
            Err(CredentialError::UnsupportedScheme("Basic".to_string()))
        );

        let result = store.validate("Basic abc123");
        assert!(matches!(result, Err(CredentialError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_malformed_credential() {
        let (store, _clock) = store_with_fake_clock(30);

        for credential in ["bearer", "", "bearer a b"] {
            assert_eq!(
                store.validate(credential),
                Err(CredentialError::MalformedCredential),
                "credential {:?} should be malformed",
                credential
            );
        }
    }

    #[test]
    fn test_unknown_token() {
        let (store, _clock) = store_with_fake_clock(30);

        let result = store.validate("Bearer not-a-real-token");
        assert_eq!(result, Err(CredentialError::UnknownToken));
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let (store, _clock) = store_with_fake_clock(30);

        let issued = store.issue(Uuid::new_v4());

        store.revoke(&issued.token);
        assert_eq!(
            store.validate_token(&issued.token),
            Err(CredentialError::UnknownToken)
        );

        // Revoking again, or revoking a token that never existed, is a no-op.
        store.revoke(&issued.token);
        store.revoke("never-issued");
    }

    #[test]
    fn test_tokens_are_unique_per_issue() {
        let (store, _clock) = store_with_fake_clock(30);

        let user_id = Uuid::new_v4();
        let first = store.issue(user_id);
        let second = store.issue(user_id);

        assert_ne!(first.token, second.token);

        // Both sessions resolve independently to the same user.
        assert_eq!(store.validate_token(&first.token), Ok(user_id));
        assert_eq!(store.validate_token(&second.token), Ok(user_id));
    }
}
