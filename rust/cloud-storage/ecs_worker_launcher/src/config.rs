use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::whitelist::SuffixWhitelist;

/// The file the config is read from when `CONFIG_PATH` is not set, relative to the working
/// directory of the lambda.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// The cluster tasks are started in when the config does not name one.
pub const DEFAULT_CLUSTER: &str = "default";

/// The per invocation configuration of the launcher, deployed next to the lambda as `config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The url of the queue the notification is forwarded to
    pub queue: String,

    /// The task definition to run
    pub task: String,

    /// The S3 key suffixes which are processed
    #[serde(rename = "s3_key_suffix_whitelist", default)]
    pub suffix_whitelist: SuffixWhitelist,

    /// The cluster to run on
    #[serde(default = "default_cluster")]
    pub cluster: String,
}

fn default_cluster() -> String {
    DEFAULT_CLUSTER.to_string()
}

impl Config {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: Config = serde_json::from_str(raw).context("config is not valid")?;
        anyhow::ensure!(!config.queue.is_empty(), "queue must not be empty");
        anyhow::ensure!(!config.task.is_empty(), "task must not be empty");
        Ok(config)
    }

    #[tracing::instrument(err)]
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("unable to parse {}", path.display()))
    }
}
