mod config;
mod handler;
mod model;
mod service;

use std::sync::Arc;

use handler::handler;
use lambda_runtime::{
    Error, LambdaEvent, run, service_fn,
    tracing::{self, subscriber::EnvFilter},
};
use model::CheckFileRequest;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .flatten_event(true)
        .init();

    tracing::trace!("initiating lambda");

    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(&config::load_aws_config().await));

    tracing::trace!("initialized s3 client");

    let shared_s3_client = Arc::new(s3_client);

    let func = service_fn(move |event: LambdaEvent<CheckFileRequest>| {
        let s3_client = shared_s3_client.clone();

        async move { handler(&s3_client, event).await }
    });

    run(func).await
}
