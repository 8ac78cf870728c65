use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme + authority of the admin backend, no trailing slash.
    pub base_url: String,
    /// Interval between a settlement and the flash clear it schedules.
    /// Set via PANEL_FLASH_CLEAR_MS. Default: 1500.
    pub flash_clear_ms: u64,
    /// Per-request timeout for the decision endpoint, in seconds.
    /// Set via PANEL_REQUEST_TIMEOUT_SECS. Default: 10.
    pub request_timeout_secs: u64,
    /// Preferred UI language, if the operator pinned one.
    pub language: Option<String>,
}

impl Config {
    pub fn flash_clear(&self) -> Duration {
        Duration::from_millis(self.flash_clear_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    let base_url =
        std::env::var("PANEL_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".into());
    url::Url::parse(&base_url)
        .with_context(|| format!("PANEL_BASE_URL is not a valid URL: {base_url}"))?;

    Ok(Config {
        base_url: base_url.trim_end_matches('/').to_string(),
        flash_clear_ms: std::env::var("PANEL_FLASH_CLEAR_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1500),
        request_timeout_secs: std::env::var("PANEL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10),
        language: std::env::var("PANEL_LANGUAGE").ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_derive_from_fields() {
        let cfg = Config {
            base_url: "http://localhost:8000".into(),
            flash_clear_ms: 1500,
            request_timeout_secs: 10,
            language: None,
        };
        assert_eq!(cfg.flash_clear(), Duration::from_millis(1500));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
    }
}
