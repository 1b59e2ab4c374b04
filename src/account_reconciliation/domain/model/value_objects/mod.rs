pub mod reconciliation_outcome;
