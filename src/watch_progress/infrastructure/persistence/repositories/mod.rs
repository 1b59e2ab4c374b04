pub mod postgres;
pub mod watch_progress_repository;
