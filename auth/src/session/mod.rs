pub mod clock;
pub mod errors;
pub mod store;

pub use clock::Clock;
pub use clock::SystemClock;
pub use errors::CredentialError;
pub use store::IssuedToken;
pub use store::SessionStore;
