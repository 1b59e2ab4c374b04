#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReconciliationOutcome {
    /// Progress rows of unknown accounts were removed.
    Swept { known_accounts: usize, deleted_rows: u64 },
    /// Invidious reported no accounts; nothing was touched.
    SkippedNoAccounts,
}
