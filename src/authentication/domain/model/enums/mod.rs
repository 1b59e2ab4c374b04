pub mod authentication_error;
