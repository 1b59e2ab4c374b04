pub mod bearer_token;
pub mod resolved_identity;
pub mod session_identifier;
