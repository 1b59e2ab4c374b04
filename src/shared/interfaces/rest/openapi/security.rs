use utoipa::{
    Modify,
    openapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
    },
};

pub const BEARER_SECURITY_SCHEME: &str = "bearerAuth";

/// Registers the bearer scheme referenced by protected paths.
///
/// The bearer value is either an Invidious `SID` cookie value or a
/// URL-encoded Invidious API token.
pub struct BearerSecurityAddon;

impl Modify for BearerSecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_SECURITY_SCHEME,
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
