//! Authentication utilities library
//!
//! Provides the session infrastructure for the inventory service:
//! - Password hashing (Argon2id)
//! - In-memory bearer-token session store with fixed TTL and lazy expiry
//! - Authentication coordination
//!
//! Tokens are opaque random identifiers held in process memory. A process
//! restart therefore invalidates every session; durability is deliberately
//! out of scope.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::SessionStore;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let store = SessionStore::new(Duration::minutes(30));
//! let user_id = Uuid::new_v4();
//! let issued = store.issue(user_id);
//! let resolved = store.validate(&format!("Bearer {}", issued.token)).unwrap();
//! assert_eq!(resolved, user_id);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let auth = Authenticator::new(Duration::minutes(30));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a session token
//! let user_id = Uuid::new_v4();
//! let issued = auth.login("password123", &hash, user_id).unwrap();
//!
//! // Per-request: resolve the credential header back to the user
//! let resolved = auth.authorize(&format!("Bearer {}", issued.token)).unwrap();
//! assert_eq!(resolved, user_id);
//!
//! // Administrative revocation
//! auth.revoke(&issued.token);
//! assert!(auth.authorize(&format!("Bearer {}", issued.token)).is_err());
//! ```

pub mod authenticator;
pub mod password;
pub mod session;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::Clock;
pub use session::CredentialError;
pub use session::IssuedToken;
pub use session::SessionStore;
pub use session::SystemClock;
