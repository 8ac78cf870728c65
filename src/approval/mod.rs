//! Approval decision dispatch.
//!
//! [`client::ApprovalClient`] speaks the one wire contract this crate
//! consumes: `POST /approval-requests/{action}/{userID}/{requestorID}` with
//! an empty body, answered by `{ "success": bool, "message": string }`.
//! [`DecisionTransport`] abstracts the client so the runtime can be driven
//! by a scripted stand-in in tests.

pub mod client;

use async_trait::async_trait;

use crate::errors::ActionError;

/// Outcome of a decision the server actually answered.
///
/// Both variants carry the server's message verbatim; it is what the user
/// sees in the flash area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// `success: true`. The pending row this decision targeted is gone.
    Accepted { message: String },
    /// `success: false`. Recoverable; the row stays actionable and no retry
    /// is attempted automatically.
    Declined { message: String },
}

impl Verdict {
    pub fn message(&self) -> &str {
        match self {
            Verdict::Accepted { message } | Verdict::Declined { message } => message,
        }
    }
}

/// Abstraction over the decision endpoint.
/// Implementations: [`client::ApprovalClient`] (HTTP), scripted test doubles.
#[async_trait]
pub trait DecisionTransport: Send + Sync {
    /// Submit one decision. `action` is opaque and passed through unvalidated.
    async fn submit(
        &self,
        action: &str,
        user_id: &str,
        requestor_id: &str,
    ) -> Result<Verdict, ActionError>;
}
