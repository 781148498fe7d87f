mod common;

use common::{body_of, event, status_of, unreachable_state};
use lambda_runtime::{Context, LambdaEvent};
use reel_notes::api::{handler, route};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let state = unreachable_state();
    let response = route(&state, &event("POST", "/api/translate", Some("{}"))).await;

    assert_eq!(status_of(&response), 404);
    assert_eq!(body_of(&response), json!({ "error": "Not found." }));
}

#[tokio::test]
async fn test_lambda_handler_accepts_rest_v1_event() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/transcript/t-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "t-1", "status": "queued" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let state = common::state_for(&server.uri());
    let payload = json!({
        "httpMethod": "GET",
        "path": "/prod/transcribe/status",
        "queryStringParameters": { "id": "t-1" },
        "body": null,
        "isBase64Encoded": false
    });

    let response = handler(&state, LambdaEvent::new(payload, Context::default()))
        .await
        .expect("handler never fails the invocation");

    assert_eq!(status_of(&response), 200);
    assert_eq!(body_of(&response)["status"], "queued");
}

#[tokio::test]
async fn test_lambda_handler_returns_error_responses_as_ok() {
    let state = unreachable_state();
    let payload = json!({
        "rawPath": "/summarize",
        "requestContext": { "http": { "method": "POST" } },
        "body": "{\"text\":\"short\"}"
    });

    let response = handler(&state, LambdaEvent::new(payload, Context::default()))
        .await
        .expect("handler never fails the invocation");

    assert_eq!(status_of(&response), 400);
}
