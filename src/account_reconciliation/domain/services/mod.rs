pub mod account_reconciliation_service;
