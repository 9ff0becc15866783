//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Booking engine configuration.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// CRM webhook endpoint that ingests leads.
    pub crm_webhook_url: String,
    /// API key passed to the webhook as a query parameter.
    pub crm_api_key: SecretString,
    /// Scheduling widget URL shown once the wizard completes.
    pub scheduling_url: String,
    /// External script injected when the calendar embed mounts.
    pub scheduling_script_url: String,
    /// Delay before scrolling to the calendar after the flip, letting
    /// layout settle.
    pub scroll_settle_delay: Duration,
    /// Collapse all transitions to instantaneous state changes.
    pub reduced_motion: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            crm_webhook_url: "https://voice-noob-production.up.railway.app/webhooks/leads/website"
                .to_string(),
            crm_api_key: SecretString::from(String::new()),
            scheduling_url: "https://cal.com/nolan-grout-nolan-grout-real-estate-y2trgn/30min"
                .to_string(),
            scheduling_script_url: "https://cdn.cal.com/cal.js".to_string(),
            scroll_settle_delay: Duration::from_millis(100),
            reduced_motion: false,
        }
    }
}

impl BookingConfig {
    /// Build config from environment variables.
    ///
    /// `BOOKIN_CRM_API_KEY` is required; everything else falls back to the
    /// site defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let crm_api_key = std::env::var("BOOKIN_CRM_API_KEY")
            .map(SecretString::from)
            .map_err(|_| ConfigError::MissingEnvVar("BOOKIN_CRM_API_KEY".to_string()))?;

        let crm_webhook_url =
            std::env::var("BOOKIN_CRM_WEBHOOK_URL").unwrap_or(defaults.crm_webhook_url);
        let scheduling_url =
            std::env::var("BOOKIN_SCHEDULING_URL").unwrap_or(defaults.scheduling_url);
        let scheduling_script_url = std::env::var("BOOKIN_SCHEDULING_SCRIPT_URL")
            .unwrap_or(defaults.scheduling_script_url);

        let scroll_settle_delay = match std::env::var("BOOKIN_SCROLL_SETTLE_MS") {
            Ok(raw) => {
                let ms: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "BOOKIN_SCROLL_SETTLE_MS".to_string(),
                    message: format!("expected milliseconds, got {raw:?}"),
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => defaults.scroll_settle_delay,
        };

        let reduced_motion = std::env::var("BOOKIN_REDUCED_MOTION")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            crm_webhook_url,
            crm_api_key,
            scheduling_url,
            scheduling_script_url,
            scroll_settle_delay,
            reduced_motion,
        })
    }
}
