//! Errors reported when a countdown cannot be started

use thiserror::Error;

/// Reasons a countdown refuses to start.
///
/// None of these are retried. The surrounding page keeps working without
/// the widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("no event date provided")]
    ConfigMissing,

    #[error("invalid event date {input:?}: {reason}")]
    ConfigInvalid { input: String, reason: String },

    #[error("countdown element not found in the render target")]
    RenderTargetMissing,

    #[error("countdown is already running")]
    AlreadyRunning,
}

impl CountdownError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
