#![recursion_limit = "256"]

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use ecs_worker_launcher::{
    context::Context,
    handler::handler,
    logging::{self, Environment},
    service,
    settings::Settings,
};
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    let environment = Environment::from_env();
    logging::init_tracing(environment);
    tracing::info!(environment=?environment, "initiating lambda");

    let settings = Settings::from_env();

    tracing::trace!(config_path=?settings.config_path, "initialized settings");

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let sqs_client = service::sqs::SQS::new(aws_sdk_sqs::Client::new(&aws_config));

    tracing::trace!("initialized sqs client");

    let ecs_client = service::ecs::ECS::new(aws_sdk_ecs::Client::new(&aws_config));

    tracing::trace!("initialized ecs client");

    let ctx = Context {
        sqs_client: Arc::new(sqs_client),
        ecs_client: Arc::new(ecs_client),
        config_path: settings.config_path,
    };

    let func = service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let ctx = ctx.clone();
        async move { handler(ctx, event).await }
    });

    run(func).await
}
