use anyhow::Context as _;
use lambda_runtime::{Error, LambdaEvent, tracing};

use crate::{config::Config, context::Context, error::LaunchError, notification};

/// Returned to the lambda runtime once the notification is queued and the worker is started.
pub const SUCCESS_MESSAGE: &str = "Successfully processed Amazon S3 URL.";

/// Forwards the S3 notification to the queue and starts a worker task for it.
/// Every failure is logged here, once.
#[tracing::instrument(skip(ctx, event), fields(request_id = %event.context.request_id))]
pub async fn handler(ctx: Context, event: LambdaEvent<serde_json::Value>) -> Result<String, Error> {
    match process(&ctx, &event.payload).await {
        Ok(message) => {
            tracing::info!("{message}");
            Ok(message)
        }
        Err(LaunchError::Rejected { key }) => {
            tracing::warn!(key=%key, "key suffix is not in the whitelist");
            Err(LaunchError::Rejected { key }.into())
        }
        Err(e) => {
            tracing::error!(error=?e, "unable to process notification");
            Err(e.into())
        }
    }
}

/// Loads the config for this invocation and forwards the event with it.
pub async fn process(ctx: &Context, payload: &serde_json::Value) -> Result<String, LaunchError> {
    tracing::debug!(event=%payload, "received event");

    let config = Config::from_file(&ctx.config_path).map_err(LaunchError::Config)?;

    tracing::debug!(config=?config, "loaded config");

    forward(ctx, &config, payload).await
}

/// Filters the notification by key suffix, then sends it to the queue and starts the task.
/// The task is only started once the message is in the queue.
#[tracing::instrument(skip(ctx, config, payload))]
pub async fn forward(
    ctx: &Context,
    config: &Config,
    payload: &serde_json::Value,
) -> Result<String, LaunchError> {
    let key = notification::first_object_key(payload)?;

    if !config.suffix_whitelist.matches(&key) {
        return Err(LaunchError::Rejected { key });
    }

    let message_body = serde_json::to_string(payload)
        .context("unable to serialize event")
        .map_err(LaunchError::Send)?;

    let message_id = ctx
        .sqs_client
        .send_message(&config.queue, message_body)
        .await
        .map_err(LaunchError::Send)?;

    tracing::info!(message_id=%message_id, "message sent");

    let tasks = ctx
        .ecs_client
        .run_task(&config.task, &config.cluster)
        .await
        .map_err(LaunchError::Launch)?;

    tracing::info!(task=%config.task, tasks=?tasks, "task started");

    Ok(SUCCESS_MESSAGE.to_string())
}
