use serde::Deserialize;

use crate::error::LaunchError;

// see: https://docs.aws.amazon.com/AmazonS3/latest/userguide/notification-content-structure.html
// Only the fields the launcher reads are modelled, the raw payload is what gets forwarded.
#[derive(Debug, Deserialize)]
struct S3Notification {
    #[serde(rename = "Records", default)]
    records: Vec<S3NotificationRecord>,
}

#[derive(Debug, Deserialize)]
struct S3NotificationRecord {
    s3: S3Entity,
}

#[derive(Debug, Deserialize)]
struct S3Entity {
    object: S3Object,
}

#[derive(Debug, Deserialize)]
struct S3Object {
    key: Option<String>,
}

/// Returns the object key of the first record in an S3 notification.
///
/// The key is returned as delivered by S3, i.e. still url encoded.
pub fn first_object_key(payload: &serde_json::Value) -> Result<String, LaunchError> {
    let notification = S3Notification::deserialize(payload)
        .map_err(|e| LaunchError::InvalidEvent(format!("not an s3 notification: {e}")))?;

    let record = notification
        .records
        .into_iter()
        .next()
        .ok_or_else(|| LaunchError::InvalidEvent("event contains no records".to_string()))?;

    record
        .s3
        .object
        .key
        .ok_or_else(|| LaunchError::InvalidEvent("first record has no object key".to_string()))
}
