pub mod invidious_integration_error;
pub mod token_mode;
