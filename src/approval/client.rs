use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::approval::{DecisionTransport, Verdict};
use crate::config::Config;
use crate::errors::ActionError;

/// Base path of the decision endpoint. The three parameters are appended as
/// percent-encoded path segments, in `action/userID/requestorID` order.
pub const APPROVAL_BASE_PATH: &str = "/approval-requests";

/// Strict wire payload. Exactly two fields; anything else is a protocol
/// violation, not a silently-tolerated extension.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DecisionPayload {
    success: bool,
    message: String,
}

/// HTTP client for the approval decision endpoint.
#[derive(Clone)]
pub struct ApprovalClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApprovalClient {
    /// Build a client against `base_url` (scheme + authority, no trailing
    /// slash required) with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .user_agent("Panelink/1.0")
                .build()
                .expect("failed to build approval HTTP client"),
            base_url,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.base_url.clone(), cfg.request_timeout())
    }

    /// Relative request path for one decision, each parameter encoded as a
    /// URL path segment.
    pub fn decision_path(action: &str, user_id: &str, requestor_id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            APPROVAL_BASE_PATH,
            urlencoding::encode(action),
            urlencoding::encode(user_id),
            urlencoding::encode(requestor_id),
        )
    }

    async fn post_decision(
        &self,
        action: &str,
        user_id: &str,
        requestor_id: &str,
    ) -> Result<Verdict, ActionError> {
        let path = Self::decision_path(action, user_id, requestor_id);
        let url = format!("{}{}", self.base_url, path);

        debug!(action, user_id, requestor_id, %url, "submitting approval decision");

        // Empty body: the three parameters travel in the path alone.
        let resp = self.client.post(&url).send().await?;
        let resp = resp.error_for_status()?;
        let body = resp.bytes().await?;

        let payload: DecisionPayload = serde_json::from_slice(&body)
            .map_err(|e| ActionError::Protocol(e.to_string()))?;

        info!(
            action,
            user_id,
            requestor_id,
            success = payload.success,
            "approval decision settled"
        );

        if payload.success {
            Ok(Verdict::Accepted {
                message: payload.message,
            })
        } else {
            Ok(Verdict::Declined {
                message: payload.message,
            })
        }
    }
}

#[async_trait]
impl DecisionTransport for ApprovalClient {
    async fn submit(
        &self,
        action: &str,
        user_id: &str,
        requestor_id: &str,
    ) -> Result<Verdict, ActionError> {
        let result = self.post_decision(action, user_id, requestor_id).await;
        if let Err(ref e) = result {
            warn!(
                action,
                user_id,
                requestor_id,
                kind = e.kind(),
                error = %e,
                "approval decision failed"
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_path_orders_segments() {
        assert_eq!(
            ApprovalClient::decision_path("approve", "12", "34"),
            "/approval-requests/approve/12/34"
        );
    }

    #[test]
    fn test_decision_path_reject_case() {
        assert_eq!(
            ApprovalClient::decision_path("reject", "42", "7"),
            "/approval-requests/reject/42/7"
        );
    }

    #[test]
    fn test_decision_path_encodes_reserved_characters() {
        assert_eq!(
            ApprovalClient::decision_path("needs review", "a/b", "x?y"),
            "/approval-requests/needs%20review/a%2Fb/x%3Fy"
        );
    }

    #[test]
    fn test_decision_path_encodes_non_ascii() {
        assert_eq!(
            ApprovalClient::decision_path("aprobación", "42", "7"),
            "/approval-requests/aprobaci%C3%B3n/42/7"
        );
    }

    #[test]
    fn test_payload_rejects_extra_fields() {
        let err = serde_json::from_str::<DecisionPayload>(
            r#"{"success": true, "message": "ok", "extra": 1}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("extra"));
    }

    #[test]
    fn test_payload_requires_both_fields() {
        assert!(serde_json::from_str::<DecisionPayload>(r#"{"success": true}"#).is_err());
        assert!(serde_json::from_str::<DecisionPayload>(r#"{"message": "ok"}"#).is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApprovalClient::new("http://localhost:8000/", Duration::from_secs(1));
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
