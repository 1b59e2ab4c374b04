pub mod watch_progress_domain_error;
