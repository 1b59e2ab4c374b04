pub mod invidious_session_resolver_impl;
