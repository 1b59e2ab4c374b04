use std::fmt;

use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};

use crate::invidious_integration::domain::model::{
    enums::{invidious_integration_error::InvidiousIntegrationError, token_mode::TokenMode},
    value_objects::session_identifier::SessionIdentifier,
};

/// A raw bearer credential, classified by whether it decodes as structured data.
///
/// Classification never evaluates client input: the token is percent-decoded
/// and handed to a strict JSON parser. Anything that is not a JSON object is
/// kept as an opaque `SID` cookie value.
#[derive(Clone)]
pub enum BearerToken {
    Structured {
        raw: String,
        payload: Map<String, Value>,
    },
    Opaque(String),
}

impl BearerToken {
    pub fn parse(raw: &str) -> Self {
        let structured = percent_decode_str(raw)
            .decode_utf8()
            .ok()
            .and_then(|decoded| serde_json::from_str::<Value>(&decoded).ok());

        match structured {
            Some(Value::Object(payload)) => Self::Structured {
                raw: raw.to_string(),
                payload,
            },
            _ => Self::Opaque(raw.to_string()),
        }
    }

    /// The token exactly as the client sent it.
    pub fn raw(&self) -> &str {
        match self {
            Self::Structured { raw, .. } | Self::Opaque(raw) => raw,
        }
    }

    pub fn mode(&self) -> TokenMode {
        match self {
            Self::Structured { .. } => TokenMode::Header,
            Self::Opaque(_) => TokenMode::Cookie,
        }
    }

    pub fn session_identifier(&self) -> Result<SessionIdentifier, InvidiousIntegrationError> {
        match self {
            Self::Structured { payload, .. } => match payload.get("session") {
                Some(Value::String(session)) => SessionIdentifier::new(session),
                _ => Err(InvidiousIntegrationError::MissingSessionField),
            },
            Self::Opaque(raw) => SessionIdentifier::new(raw),
        }
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("mode", &self.mode())
            .field("raw", &"<redacted>")
            .finish()
    }
}
