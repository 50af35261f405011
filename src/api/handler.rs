//! Lambda handler for the notification endpoint.
//!
//! One invocation = one notification attempt: check configuration, fetch the
//! latest upstream item, optionally translate it, post it to Slack. GET and
//! POST behave identically and the request body is unused.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::helpers;
use crate::core::config::AppConfig;
use crate::pipeline::NotifyPipeline;

pub use self::function_handler as handler;

/// Lambda entrypoint.
///
/// # Errors
///
/// Never returns `Err`: every failure is logged with its cause and collapsed
/// into the opaque 500 response.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    let method = event
        .payload
        .pointer("/requestContext/http/method")
        .and_then(Value::as_str)
        .unwrap_or("UNKNOWN");
    info!(
        "Received {} request, correlation_id={}",
        method, correlation_id
    );

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error (correlation_id={}): {}", correlation_id, e);
            return Ok(helpers::failure_response());
        }
    };

    let pipeline = match NotifyPipeline::from_config(&config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!(
                "Failed to build pipeline (correlation_id={}): {}",
                correlation_id, e
            );
            return Ok(helpers::failure_response());
        }
    };

    match pipeline.run().await {
        Ok(item) => {
            info!("Notification delivered (correlation_id={})", correlation_id);
            Ok(helpers::ok_response(config.source.success_message(), &item))
        }
        Err(e) => {
            error!(
                "Notification failed (correlation_id={}): {}",
                correlation_id, e
            );
            Ok(helpers::failure_response())
        }
    }
}
