use thiserror::Error;

/// Failures of a submitted approval decision.
///
/// An application-level rejection (`success: false`) is *not* an error: it
/// is a [`crate::approval::Verdict::Declined`] and carries the server's own
/// message. This enum covers the two ways the exchange itself can go wrong.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The request never completed cleanly: connect error, timeout, or a
    /// non-2xx status from the server.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response arrived but its body is not the expected
    /// `{ success, message }` object.
    #[error("protocol violation: {0}")]
    Protocol(String),
}

impl ActionError {
    /// Stable tag for logs and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            ActionError::Transport(_) => "transport",
            ActionError::Protocol(_) => "protocol",
        }
    }
}
