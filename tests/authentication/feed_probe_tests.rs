use std::time::Duration;

use syncious::invidious_integration::{
    domain::model::{
        enums::invidious_integration_error::InvidiousIntegrationError,
        value_objects::bearer_token::BearerToken,
    },
    infrastructure::http::{
        invidious_feed_probe::InvidiousFeedProbe,
        reqwest_invidious_feed_probe_impl::ReqwestInvidiousFeedProbeImpl,
    },
};

use crate::support::{FakeInvidiousFeed, FeedRequest, HEADER_TOKEN, OPAQUE_TOKEN};

fn feed_probe(feed: &FakeInvidiousFeed, timeout: Duration) -> ReqwestInvidiousFeedProbeImpl {
    let client = ReqwestInvidiousFeedProbeImpl::build_client(timeout, false).expect("client");
    ReqwestInvidiousFeedProbeImpl::new(client, &feed.base_url)
}

#[tokio::test]
async fn structured_token_is_sent_as_bearer_header() {
    let feed = FakeInvidiousFeed::start().await;
    let probe = feed_probe(&feed, Duration::from_secs(5));

    let result = probe.probe(&BearerToken::parse(HEADER_TOKEN)).await;

    assert_eq!(result, Ok(()));
    assert_eq!(
        feed.requests(),
        vec![FeedRequest {
            authorization: Some(format!("Bearer {HEADER_TOKEN}")),
            cookie: None,
        }]
    );
}

#[tokio::test]
async fn opaque_token_is_sent_as_sid_cookie() {
    let feed = FakeInvidiousFeed::start().await;
    let probe = feed_probe(&feed, Duration::from_secs(5));

    let result = probe.probe(&BearerToken::parse(OPAQUE_TOKEN)).await;

    assert_eq!(result, Ok(()));
    assert_eq!(
        feed.requests(),
        vec![FeedRequest {
            authorization: None,
            cookie: Some(format!("SID={OPAQUE_TOKEN}")),
        }]
    );
}

#[tokio::test]
async fn non_success_status_is_upstream_rejection() {
    let feed = FakeInvidiousFeed::start().await;
    let probe = feed_probe(&feed, Duration::from_secs(5));

    let result = probe.probe(&BearerToken::parse("nope")).await;

    assert_eq!(result, Err(InvidiousIntegrationError::UpstreamRejected(403)));
}

#[tokio::test]
async fn trailing_slash_on_instance_is_ignored() {
    let feed = FakeInvidiousFeed::start().await;
    let client =
        ReqwestInvidiousFeedProbeImpl::build_client(Duration::from_secs(5), false).expect("client");
    let probe = ReqwestInvidiousFeedProbeImpl::new(client, &format!("{}/", feed.base_url));

    assert_eq!(probe.probe(&BearerToken::parse(OPAQUE_TOKEN)).await, Ok(()));
}

#[tokio::test]
async fn slow_upstream_times_out_as_unavailable() {
    let feed = FakeInvidiousFeed::start_with_delay(Duration::from_secs(5)).await;
    let probe = feed_probe(&feed, Duration::from_millis(200));

    let result = probe.probe(&BearerToken::parse(OPAQUE_TOKEN)).await;

    assert!(
        matches!(result, Err(InvidiousIntegrationError::UpstreamUnavailable(_))),
        "unexpected result: {result:?}"
    );
    assert_eq!(feed.requests().len(), 1);
}
