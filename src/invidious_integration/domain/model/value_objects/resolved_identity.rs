use std::fmt;

use crate::invidious_integration::domain::model::enums::invidious_integration_error::InvidiousIntegrationError;

/// Invidious account name (its `email` column). Partition key for user data.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResolvedIdentity(String);

impl ResolvedIdentity {
    pub fn new(value: &str) -> Result<Self, InvidiousIntegrationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.len() > 240 {
            return Err(InvidiousIntegrationError::InvalidIdentity);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
