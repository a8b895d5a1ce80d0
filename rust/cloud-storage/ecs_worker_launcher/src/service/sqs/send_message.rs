use anyhow::Context;

#[tracing::instrument(skip(sqs_client, message_body))]
pub(in crate::service::sqs) async fn send_message(
    sqs_client: &aws_sdk_sqs::Client,
    queue_url: &str,
    message_body: String,
) -> Result<String, anyhow::Error> {
    let output = sqs_client
        .send_message()
        .queue_url(queue_url)
        .message_body(message_body)
        .send()
        .await
        .inspect_err(|e| tracing::error!(error=?e, "unable to send message"))
        .context("unable to send message")?;

    let message_id = output
        .message_id()
        .context("send message response is missing a message id")?;

    Ok(message_id.to_string())
}
