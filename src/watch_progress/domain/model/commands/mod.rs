pub mod delete_watch_progress_command;
pub mod save_watch_progress_command;
