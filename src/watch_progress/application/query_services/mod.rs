pub mod watch_progress_query_service_impl;
