use thiserror::Error;

/// Cause-specific failures of the Invidious bridge.
///
/// These never reach a client as-is; the authentication gate collapses every
/// variant into a single unauthorized outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvidiousIntegrationError {
    #[error("structured token has no session field")]
    MissingSessionField,

    #[error("session identifier is blank")]
    BlankSessionIdentifier,

    #[error("invidious rejected the token with status {0}")]
    UpstreamRejected(u16),

    #[error("invidious unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("no account is bound to the session")]
    AccountNotFound,

    #[error("account identity is invalid")]
    InvalidIdentity,

    #[error("invidious storage error: {0}")]
    StorageError(String),
}
