pub mod watch_progress_command_service;
pub mod watch_progress_query_service;
