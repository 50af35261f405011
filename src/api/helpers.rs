//! Response builders for the notification endpoint.

use serde_json::{Value, json};

use crate::core::models::Item;

/// Error message returned for every failure, regardless of cause. The real
/// error stays in the server-side logs.
pub const OPAQUE_ERROR: &str = "エラーが発生しました";

/// Returns a 200 OK response carrying the delivered item.
#[must_use]
pub fn ok_response(message: &str, item: &Item) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "success": true, "message": message, "data": item }).to_string()
    })
}

/// Returns a 500 response with the opaque failure body.
#[must_use]
pub fn failure_response() -> Value {
    json!({
        "statusCode": 500,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "success": false, "error": OPAQUE_ERROR }).to_string()
    })
}
