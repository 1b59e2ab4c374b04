/// How a bearer token is presented to Invidious.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenMode {
    /// URL-encoded JSON API token, sent as `Authorization: Bearer`.
    Header,
    /// Bare `SID` cookie value.
    Cookie,
}

impl TokenMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Cookie => "cookie",
        }
    }
}
