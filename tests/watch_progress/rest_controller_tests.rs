use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use syncious::watch_progress::interfaces::rest::resources::watch_progress_resource::WatchProgressResource;
use tower::ServiceExt;

use crate::support::{
    ALICE, ALICE_TOKEN, BOB_TOKEN, FakeWatchProgressRepository, VIDEO_ID, create_rest_harness,
    progress,
};

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request"),
        None => builder.body(Body::empty()).expect("valid request"),
    }
}

async fn json_body(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

fn video_uri(video_id: &str) -> String {
    format!("/video/{video_id}")
}

#[tokio::test]
async fn get_without_credentials_is_unauthorized() {
    let harness = create_rest_harness(FakeWatchProgressRepository::with_entries(vec![]));

    let response = harness
        .app
        .oneshot(request(Method::GET, &video_uri(VIDEO_ID), None, None))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_video_id_is_checked_after_authentication() {
    let harness = create_rest_harness(FakeWatchProgressRepository::with_entries(vec![]));

    let anonymous = harness
        .app
        .clone()
        .oneshot(request(Method::GET, "/video/bad", None, None))
        .await
        .expect("response");
    let authenticated = harness
        .app
        .oneshot(request(Method::GET, "/video/bad", Some(ALICE_TOKEN), None))
        .await
        .expect("response");

    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(authenticated.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_returns_saved_position() {
    let harness = create_rest_harness(FakeWatchProgressRepository::with_entries(vec![progress(
        ALICE, VIDEO_ID, 61.5,
    )]));

    let response = harness
        .app
        .oneshot(request(
            Method::GET,
            &video_uri(VIDEO_ID),
            Some(ALICE_TOKEN),
            None,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, json!({ "time": 61.5 }));
    let resource: WatchProgressResource = serde_json::from_value(body).expect("resource");
    assert_eq!(resource.time, 61.5);
}

#[tokio::test]
async fn get_is_partitioned_by_authenticated_identity() {
    let harness = create_rest_harness(FakeWatchProgressRepository::with_entries(vec![progress(
        ALICE, VIDEO_ID, 61.5,
    )]));

    let response = harness
        .app
        .oneshot(request(Method::GET, &video_uri(VIDEO_ID), Some(BOB_TOKEN), None))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_saves_position_for_authenticated_identity() {
    let harness = create_rest_harness(FakeWatchProgressRepository::with_entries(vec![]));

    let response = harness
        .app
        .oneshot(request(
            Method::POST,
            &video_uri(VIDEO_ID),
            Some(ALICE_TOKEN),
            Some(json!({ "time": 300.25, "email": "mallory@example.com" })),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        harness.repository.stored_seconds(ALICE, VIDEO_ID),
        Some(300.25)
    );
    assert_eq!(
        harness
            .repository
            .stored_seconds("mallory@example.com", VIDEO_ID),
        None
    );
}

#[tokio::test]
async fn post_rejects_negative_position() {
    let harness = create_rest_harness(FakeWatchProgressRepository::with_entries(vec![]));

    let response = harness
        .app
        .oneshot(request(
            Method::POST,
            &video_uri(VIDEO_ID),
            Some(ALICE_TOKEN),
            Some(json!({ "time": -5.0 })),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(harness.repository.len(), 0);
}

#[tokio::test]
async fn post_rejects_malformed_video_id() {
    let harness = create_rest_harness(FakeWatchProgressRepository::with_entries(vec![]));

    let response = harness
        .app
        .oneshot(request(
            Method::POST,
            "/video/not-a-valid-video-id",
            Some(ALICE_TOKEN),
            Some(json!({ "time": 5.0 })),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["message"].as_str().is_some_and(|m| m.contains("video id")));
}

#[tokio::test]
async fn delete_removes_position_then_reports_not_found() {
    let harness = create_rest_harness(FakeWatchProgressRepository::with_entries(vec![progress(
        ALICE, VIDEO_ID, 10.0,
    )]));

    let first = harness
        .app
        .clone()
        .oneshot(request(
            Method::DELETE,
            &video_uri(VIDEO_ID),
            Some(ALICE_TOKEN),
            None,
        ))
        .await
        .expect("response");
    let second = harness
        .app
        .oneshot(request(
            Method::DELETE,
            &video_uri(VIDEO_ID),
            Some(ALICE_TOKEN),
            None,
        ))
        .await
        .expect("response");

    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn storage_failure_is_reported_without_details() {
    let harness = create_rest_harness(FakeWatchProgressRepository::failing());

    let response = harness
        .app
        .oneshot(request(
            Method::GET,
            &video_uri(VIDEO_ID),
            Some(ALICE_TOKEN),
            None,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await, json!({ "message": "internal error" }));
}
