pub mod account_reconciliation_service_impl;
