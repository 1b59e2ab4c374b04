pub mod invidious_session_resolver;
