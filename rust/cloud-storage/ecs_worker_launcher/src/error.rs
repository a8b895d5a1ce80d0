use thiserror::Error;

/// The ways a single invocation can fail. Every variant is terminal for the invocation.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("unable to load config: {0:#}")]
    Config(anyhow::Error),

    #[error("invalid notification event: {0}")]
    InvalidEvent(String),

    #[error("Suffix for key: {key} is not in the whitelist")]
    Rejected { key: String },

    #[error("An error has occurred while sending message: {0:#}")]
    Send(anyhow::Error),

    #[error("An error has occurred while starting task: {0:#}")]
    Launch(anyhow::Error),
}
