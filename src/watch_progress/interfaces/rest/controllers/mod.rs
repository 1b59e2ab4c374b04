pub mod watch_progress_rest_controller;
