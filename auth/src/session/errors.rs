use thiserror::Error;

/// Error type for credential validation.
///
/// Every variant maps to an unauthorized outcome at the HTTP boundary, but
/// the kinds stay distinguishable here so behavior can be asserted on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Credential is not of the form '<scheme> <token>'")]
    MalformedCredential,

    #[error("Unsupported authorization scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Token is not in the active session set")]
    UnknownToken,

    #[error("Token is expired")]
    ExpiredToken,
}
