use crate::invidious_integration::domain::model::enums::invidious_integration_error::InvidiousIntegrationError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SessionIdentifier(String);

impl SessionIdentifier {
    pub fn new(value: &str) -> Result<Self, InvidiousIntegrationError> {
        if value.trim().is_empty() {
            return Err(InvidiousIntegrationError::BlankSessionIdentifier);
        }

        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
