use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountReconciliationError {
    #[error("could not list invidious accounts: {0}")]
    AccountListingFailed(String),

    #[error("could not remove orphaned progress: {0}")]
    CleanupFailed(String),
}
