use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::MissedTickBehavior};

use crate::account_reconciliation::domain::{
    model::value_objects::reconciliation_outcome::ReconciliationOutcome,
    services::account_reconciliation_service::AccountReconciliationService,
};

pub mod application;
pub mod domain;

/// Runs the sweep every `interval`, starting immediately. Abort the handle to stop it.
pub fn spawn_reconciliation_schedule(
    service: Arc<dyn AccountReconciliationService>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match service.reconcile().await {
                Ok(ReconciliationOutcome::Swept {
                    known_accounts,
                    deleted_rows,
                }) => {
                    tracing::info!(known_accounts, deleted_rows, "account reconciliation finished");
                }
                Ok(ReconciliationOutcome::SkippedNoAccounts) => {
                    tracing::warn!("invidious reported no accounts, reconciliation skipped");
                }
                Err(error) => {
                    tracing::warn!(%error, "account reconciliation failed");
                }
            }
        }
    })
}
