pub mod require_authentication;
