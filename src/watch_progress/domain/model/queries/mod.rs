pub mod get_watch_progress_query;
