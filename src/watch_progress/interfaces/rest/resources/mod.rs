pub mod save_watch_progress_request_resource;
pub mod watch_progress_resource;
