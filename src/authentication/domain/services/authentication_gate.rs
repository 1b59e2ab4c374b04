use async_trait::async_trait;

use crate::{
    authentication::domain::model::enums::authentication_error::AuthenticationError,
    invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity,
};

#[async_trait]
pub trait AuthenticationGate: Send + Sync {
    /// Resolves the `Authorization` header value, if any, to an identity.
    async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Result<ResolvedIdentity, AuthenticationError>;
}
