use newscast::api::helpers::{OPAQUE_ERROR, failure_response, ok_response};
use newscast::core::models::{Item, RawItem};
use serde_json::Value;

/// Tests for the HTTP response builders. These verify the acknowledgment
/// contract: 200 with the delivered item on success, an opaque 500 on any
/// failure.

fn item() -> Item {
    Item::from_raw(RawItem {
        source_name: None,
        title: Some("Ep 1".to_string()),
        body: Some("Hello".to_string()),
        url: Some("https://x.com/1".to_string()),
        published_at: Some("2024-01-01".to_string()),
    })
    .expect("fixture item should validate")
}

fn body_json(response: &Value) -> Value {
    let body = response["body"].as_str().expect("body should be a string");
    serde_json::from_str(body).expect("body should be valid JSON")
}

#[test]
fn test_ok_response_shape() {
    let response = ok_response("ポッドキャスト情報をSlackに送信しました", &item());

    assert_eq!(response["statusCode"], 200);

    let body = body_json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "ポッドキャスト情報をSlackに送信しました");
    assert_eq!(body["data"]["title"], "Ep 1");
    assert_eq!(body["data"]["url"], "https://x.com/1");
    assert!(
        body["data"]["publishedAt"].is_string(),
        "item timestamp should serialize into the payload"
    );
}

#[test]
fn test_failure_response_is_opaque() {
    let response = failure_response();

    assert_eq!(response["statusCode"], 500);

    let body = body_json(&response);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"], OPAQUE_ERROR,
        "callers get the same message regardless of what failed"
    );
    assert!(
        body.get("data").is_none(),
        "no item data on the failure path"
    );
    assert!(
        body.get("message").is_none(),
        "no detail beyond the opaque error"
    );
}
