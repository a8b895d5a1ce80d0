mod send_message;

use aws_sdk_sqs as sqs;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockSQSClient as SQS;
#[cfg(not(test))]
pub use SQSClient as SQS;

#[derive(Clone, Debug)]
pub struct SQSClient {
    /// Inner SQS client
    inner: sqs::Client,
}

#[cfg_attr(test, automock)]
impl SQSClient {
    pub fn new(inner: sqs::Client) -> Self {
        Self { inner }
    }

    /// Sends `message_body` to the queue and returns the id SQS assigned to the message.
    pub async fn send_message(
        &self,
        queue_url: &str,
        message_body: String,
    ) -> Result<String, anyhow::Error> {
        send_message::send_message(&self.inner, queue_url, message_body).await
    }
}
