use crate::error_fmt::error_chain_fmt;
use std::fmt::Debug;

#[derive(thiserror::Error)]
pub enum TrackerError {
    #[error("Failed to reach upstream")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected upstream response: {0}")]
    MalformedResponse(String),
    #[error("Unsupported asset: {0}")]
    UnsupportedAsset(String),
    #[error("Refresh scheduler is no longer running")]
    SchedulerStopped,
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl TrackerError {
    pub fn malformed(context: impl Into<String>) -> Self {
        TrackerError::MalformedResponse(context.into())
    }
}

impl Debug for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
