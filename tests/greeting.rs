//! End-to-end tests for the greeting endpoint.

use serde_json::Value;

mod common;

const EXPECTED_GREETING: &str = "welcome all : name: sub, version: v1";

#[tokio::test]
async fn test_root_returns_greeting() {
    let shutdown = common::spawn_service(38081).await;
    let client = common::client();

    let res = client
        .get("http://127.0.0.1:38081/")
        .send()
        .await
        .expect("Service unreachable");

    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    let object = body.as_object().expect("Body should be a JSON object");
    assert_eq!(object.len(), 1, "Body should have exactly one key");
    assert_eq!(object["world"].as_str().unwrap(), EXPECTED_GREETING);

    shutdown.trigger();
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let shutdown = common::spawn_service(38082).await;
    let client = common::client();

    let res = client
        .get("http://127.0.0.1:38082/")
        .send()
        .await
        .expect("Service unreachable");

    let request_id = res
        .headers()
        .get("x-request-id")
        .expect("Response should carry x-request-id");
    assert!(!request_id.to_str().unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let shutdown = common::spawn_service(38083).await;
    let client = common::client();

    let res = client
        .get("http://127.0.0.1:38083/api/v1")
        .send()
        .await
        .expect("Service unreachable");

    // The base path is advertised but never mounted; only `/` is routed.
    assert_eq!(res.status(), 404);

    let res = client
        .get("http://127.0.0.1:38083/anything")
        .send()
        .await
        .expect("Service unreachable");
    assert_ne!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let shutdown = common::spawn_service(38084).await;
    let client = common::client();

    let res = client
        .post("http://127.0.0.1:38084/")
        .send()
        .await
        .expect("Service unreachable");

    assert_eq!(res.status(), 405);

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_are_identical() {
    let shutdown = common::spawn_service(38085).await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        handles.push(tokio::spawn(async {
            let client = common::client();
            let res = client
                .get("http://127.0.0.1:38085/")
                .send()
                .await
                .expect("Service unreachable");
            (res.status().as_u16(), res.text().await.unwrap())
        }));
    }

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, 200);
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["world"].as_str().unwrap(), EXPECTED_GREETING);
    }

    shutdown.trigger();
}
