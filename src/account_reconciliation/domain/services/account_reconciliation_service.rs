use async_trait::async_trait;

use crate::account_reconciliation::domain::model::{
    enums::account_reconciliation_error::AccountReconciliationError,
    value_objects::reconciliation_outcome::ReconciliationOutcome,
};

#[async_trait]
pub trait AccountReconciliationService: Send + Sync {
    async fn reconcile(&self) -> Result<ReconciliationOutcome, AccountReconciliationError>;
}
