use chrono::{DateTime, Utc};
use tracing::debug;

/// Shown when a decision fails for reasons the server never got to explain
/// (transport failure or a malformed response).
pub const GENERIC_FAILURE_TEXT: &str = "Something went wrong. Please try again.";

/// Visual styling of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One short-lived notification. No identity beyond its position in the
/// area; never addressed individually after insertion.
#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// The single shared flash region. Messages accumulate in insertion order
/// and are only ever destroyed en masse by [`FlashArea::clear_all`].
#[derive(Debug, Default)]
pub struct FlashArea {
    messages: Vec<FlashMessage>,
}

impl FlashArea {
    pub fn append(&mut self, kind: FlashKind, text: impl Into<String>) {
        let text = text.into();
        debug!(?kind, %text, "flash message appended");
        self.messages.push(FlashMessage {
            kind,
            text,
            created_at: Utc::now(),
        });
    }

    /// Empty the whole area. Idempotent: clearing an already-empty area is
    /// a no-op, so overlapping clear timers can fire in any order.
    pub fn clear_all(&mut self) {
        if !self.messages.is_empty() {
            debug!(count = self.messages.len(), "flash area cleared");
            self.messages.clear();
        }
    }

    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}
