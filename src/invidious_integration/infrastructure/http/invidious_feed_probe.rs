use async_trait::async_trait;

use crate::invidious_integration::domain::model::{
    enums::invidious_integration_error::InvidiousIntegrationError,
    value_objects::bearer_token::BearerToken,
};

/// Validity check against Invidious' authenticated feed endpoint.
#[async_trait]
pub trait InvidiousFeedProbe: Send + Sync {
    async fn probe(&self, token: &BearerToken) -> Result<(), InvidiousIntegrationError>;
}
