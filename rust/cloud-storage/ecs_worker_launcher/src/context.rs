use std::{path::PathBuf, sync::Arc};

use crate::service;

/// Everything an invocation needs which outlives the invocation itself.
#[derive(Clone)]
pub struct Context {
    pub sqs_client: Arc<service::sqs::SQS>,
    pub ecs_client: Arc<service::ecs::ECS>,
    /// Location of the config file, which is read again on every invocation
    pub config_path: PathBuf,
}
