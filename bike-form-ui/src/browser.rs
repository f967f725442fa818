//! Browser integration: blocking alerts and stored service settings.

use bike_core::api::ServiceConfig;
use bike_core::notice::{Notice, Notifier};

/// `localStorage` key holding an alternative prediction service address.
pub const API_BASE_STORAGE_KEY: &str = "bike_predict_api_base";

/// Shows notices with `window.alert`, which blocks until dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, notice: Notice) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available for notice: {}", notice);
            return;
        };
        if window.alert_with_message(notice.message()).is_err() {
            log::warn!("Failed to show notice: {}", notice);
        }
    }
}

/// Service settings for this page: the stored override if present,
/// otherwise the default address.
pub fn service_config() -> ServiceConfig {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten());
    config_from_override(stored)
}

fn config_from_override(stored: Option<String>) -> ServiceConfig {
    match stored.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        Some(base_url) => {
            log::info!("Using prediction service at {}", base_url);
            ServiceConfig::new(base_url)
        }
        None => ServiceConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_applies() {
        let config = config_from_override(Some("http://10.0.0.5:5000/".to_string()));
        assert_eq!(config.base_url, "http://10.0.0.5:5000");
    }

    #[test]
    fn test_blank_override_falls_back() {
        assert_eq!(config_from_override(None), ServiceConfig::default());
        assert_eq!(config_from_override(Some("  ".to_string())), ServiceConfig::default());
    }
}
