pub mod watch_progress_command_service_impl;
