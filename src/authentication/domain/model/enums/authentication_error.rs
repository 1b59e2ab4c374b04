use thiserror::Error;

/// The only failure a caller ever sees from the gate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("unauthorized")]
    Unauthorized,
}
