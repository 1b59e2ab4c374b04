use async_trait::async_trait;

use crate::invidious_integration::domain::model::{
    enums::invidious_integration_error::InvidiousIntegrationError,
    value_objects::resolved_identity::ResolvedIdentity,
};

/// Turns a raw bearer token into the Invidious account it belongs to.
///
/// This is the only place that knows Invidious' session model; every other
/// context consumes a [`ResolvedIdentity`].
#[async_trait]
pub trait InvidiousSessionResolver: Send + Sync {
    async fn resolve(&self, raw_token: &str) -> Result<ResolvedIdentity, InvidiousIntegrationError>;
}
