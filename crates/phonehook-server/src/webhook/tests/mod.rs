//! Webhook handler tests


use std::time::Duration;

use actix_web::{
    http::{Method, StatusCode},
    test,
};
use phonehook_config::Config;
use phonehook_crypto::Signature;
use phonehook_models::ReleaseVersion;
use phonehook_upstream_interface::{MockUpstreamService, UpstreamError};
use pretty_assertions::assert_eq;

use crate::{
    constants::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_HEADER},
    event_type::EventType,
    metrics::build_metrics_handler,
    server::{
        build_actix_app,
        tests::{arrange_config, arrange_context, arrange_context_with_upstream},
    },
};

const SECRET: &str = "iAmAsEcReTkEy";

macro_rules! init_app {
    ($config: expr) => {
        test::init_service(build_actix_app(
            arrange_context($config),
            build_metrics_handler().unwrap(),
        ))
        .await
    };
}

/// Status of a response, or of the error raised by a middleware.
macro_rules! call_status {
    ($app: expr, $req: expr) => {
        match test::try_call_service(&$app, $req).await {
            Ok(resp) => resp.status(),
            Err(err) => err.error_response().status(),
        }
    };
}

fn signed_config() -> Config {
    let mut config = arrange_config();
    config.server.webhook_secret = SECRET.into();
    config
}

fn signature_header(body: &str) -> String {
    format!(
        "sha256={}",
        Signature::compute(body.as_bytes(), SECRET).unwrap()
    )
}

#[actix_rt::test]
async fn test_ping_event() {
    let app = init_app!(arrange_config());

    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header(("Content-Type", "application/json"))
        .insert_header((GITHUB_EVENT_HEADER, EventType::Ping.to_str()))
        .set_payload(fixtures::PING_EVENT_DATA)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Ping.");
}

#[actix_rt::test]
async fn test_push_branch_event() {
    let app = init_app!(arrange_config());

    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, EventType::Push.to_str()))
        .set_payload(fixtures::PUSH_BRANCH_EVENT_DATA)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "OK");
}

#[actix_rt::test]
async fn test_push_tag_event_is_acknowledged_immediately() {
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
    let mut upstream_service = MockUpstreamService::new();
    upstream_service
        .expect_fetch_release()
        .once()
        .returning(move |version, _| {
            sender.send(version.clone()).unwrap();
            Err(UpstreamError::UnexpectedStatus {
                url: "https://github.com/google/libphonenumber/archive/v8.12.0.tar.gz".into(),
                status: 404,
            })
        });

    let app = test::init_service(build_actix_app(
        arrange_context_with_upstream(arrange_config(), upstream_service),
        build_metrics_handler().unwrap(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, EventType::Push.to_str()))
        .set_payload(fixtures::PUSH_TAG_EVENT_DATA)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "OK");

    // The release update runs in the background.
    let version = tokio::time::timeout(Duration::from_secs(5), receiver.recv())
        .await
        .unwrap();
    assert_eq!(version, Some(ReleaseVersion::new("8.12.0")));
}

#[actix_rt::test]
async fn test_push_malformed_payload() {
    let app = init_app!(arrange_config());

    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, EventType::Push.to_str()))
        .set_payload("{\"ref\": 12")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Error while parsing webhook event for type push"));
}

#[actix_rt::test]
async fn test_unhandled_event() {
    let app = init_app!(arrange_config());

    for event in [Some("pull_request"), None] {
        let mut req = test::TestRequest::post()
            .uri("/webhook")
            .set_payload(fixtures::PUSH_TAG_EVENT_DATA);
        if let Some(event) = event {
            req = req.insert_header((GITHUB_EVENT_HEADER, event));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"error": "Unhandled event."}));
    }
}

#[actix_rt::test]
async fn test_unsupported_methods() {
    let app = init_app!(arrange_config());

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let req = test::TestRequest::default()
            .method(method)
            .uri("/webhook")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            test::read_body(resp).await,
            "Method not supported by phonehook"
        );
    }
}

#[actix_rt::test]
async fn test_signed_event() {
    let app = init_app!(signed_config());

    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, EventType::Ping.to_str()))
        .insert_header((
            GITHUB_SIGNATURE_HEADER,
            signature_header(fixtures::PING_EVENT_DATA),
        ))
        .set_payload(fixtures::PING_EVENT_DATA)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Ping.");
}

#[actix_rt::test]
async fn test_missing_signature() {
    let app = init_app!(signed_config());

    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, EventType::Ping.to_str()))
        .set_payload(fixtures::PING_EVENT_DATA)
        .to_request();
    assert_eq!(call_status!(app, req), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_invalid_signature() {
    let app = init_app!(signed_config());

    for signature in [
        "sha256=".to_string(),
        "sha256=zz".to_string(),
        signature_header("{}"),
    ] {
        let req = test::TestRequest::post()
            .uri("/webhook")
            .insert_header((GITHUB_EVENT_HEADER, EventType::Ping.to_str()))
            .insert_header((GITHUB_SIGNATURE_HEADER, signature))
            .set_payload(fixtures::PING_EVENT_DATA)
            .to_request();
        assert_eq!(call_status!(app, req), StatusCode::FORBIDDEN);
    }
}

#[actix_rt::test]
async fn test_disabled_signature() {
    let mut config = signed_config();
    config.server.disable_webhook_signature = true;
    let app = init_app!(config);

    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, EventType::Ping.to_str()))
        .set_payload(fixtures::PING_EVENT_DATA)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
