use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    account_reconciliation::domain::{
        model::{
            enums::account_reconciliation_error::AccountReconciliationError,
            value_objects::reconciliation_outcome::ReconciliationOutcome,
        },
        services::account_reconciliation_service::AccountReconciliationService,
    },
    invidious_integration::infrastructure::persistence::repositories::invidious_account_repository::InvidiousAccountRepository,
    watch_progress::infrastructure::persistence::repositories::watch_progress_repository::WatchProgressRepository,
};

pub struct AccountReconciliationServiceImpl {
    account_repository: Arc<dyn InvidiousAccountRepository>,
    progress_repository: Arc<dyn WatchProgressRepository>,
}

impl AccountReconciliationServiceImpl {
    pub fn new(
        account_repository: Arc<dyn InvidiousAccountRepository>,
        progress_repository: Arc<dyn WatchProgressRepository>,
    ) -> Self {
        Self {
            account_repository,
            progress_repository,
        }
    }
}

#[async_trait]
impl AccountReconciliationService for AccountReconciliationServiceImpl {
    async fn reconcile(&self) -> Result<ReconciliationOutcome, AccountReconciliationError> {
        let known_accounts = self
            .account_repository
            .list_identities()
            .await
            .map_err(|e| AccountReconciliationError::AccountListingFailed(e.to_string()))?;

        // An empty account list would wipe the table.
        if known_accounts.is_empty() {
            return Ok(ReconciliationOutcome::SkippedNoAccounts);
        }

        let deleted_rows = self
            .progress_repository
            .delete_all_except_owners(&known_accounts)
            .await
            .map_err(|e| AccountReconciliationError::CleanupFailed(e.to_string()))?;

        Ok(ReconciliationOutcome::Swept {
            known_accounts: known_accounts.len(),
            deleted_rows,
        })
    }
}
