// Lambda bootstrap entry point for the notification endpoint.

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    newscast::setup_logging();

    run(service_fn(newscast::api::handler::function_handler)).await
}
