pub mod sqlx_watch_progress_repository_impl;
