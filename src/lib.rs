pub mod account_reconciliation;
pub mod authentication;
pub mod config;
pub mod invidious_integration;
pub mod shared;
pub mod watch_progress;
