pub mod account_reconciliation_error;
