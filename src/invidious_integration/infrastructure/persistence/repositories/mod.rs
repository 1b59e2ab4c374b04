pub mod invidious_account_repository;
pub mod postgres;
