use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};

use crate::invidious_integration::{
    domain::model::{
        enums::invidious_integration_error::InvidiousIntegrationError,
        value_objects::bearer_token::BearerToken,
    },
    infrastructure::http::invidious_feed_probe::InvidiousFeedProbe,
};

const FEED_PATH: &str = "/api/v1/auth/feed";
const SESSION_COOKIE_NAME: &str = "SID";

pub struct ReqwestInvidiousFeedProbeImpl {
    client: Client,
    feed_url: String,
}

impl ReqwestInvidiousFeedProbeImpl {
    pub fn new(client: Client, invidious_instance: &str) -> Self {
        Self {
            client,
            feed_url: format!("{}{}", invidious_instance.trim_end_matches('/'), FEED_PATH),
        }
    }

    /// Shared client for every probe. Built once at startup.
    pub fn build_client(
        timeout: Duration,
        accept_invalid_certs: bool,
    ) -> Result<Client, InvidiousIntegrationError> {
        Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| InvidiousIntegrationError::UpstreamUnavailable(e.to_string()))
    }
}

#[async_trait]
impl InvidiousFeedProbe for ReqwestInvidiousFeedProbeImpl {
    async fn probe(&self, token: &BearerToken) -> Result<(), InvidiousIntegrationError> {
        let request = self.client.get(&self.feed_url);
        let request = match token {
            BearerToken::Structured { raw, .. } => request.bearer_auth(raw),
            BearerToken::Opaque(raw) => {
                request.header(header::COOKIE, format!("{SESSION_COOKIE_NAME}={raw}"))
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| InvidiousIntegrationError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InvidiousIntegrationError::UpstreamRejected(status.as_u16()));
        }

        Ok(())
    }
}
