use crate::invidious_integration::domain::model::value_objects::resolved_identity::ResolvedIdentity;

/// Request extension inserted by the authentication middleware.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthenticatedUser {
    identity: ResolvedIdentity,
}

impl AuthenticatedUser {
    pub fn new(identity: ResolvedIdentity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &ResolvedIdentity {
        &self.identity
    }
}
