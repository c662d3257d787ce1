//! TOML configuration.
//!
//! ```toml
//! [search]
//! debounce_ms = 400
//!
//! [telemetry]
//! filter = "info,agromarket_runtime=debug"
//!
//! [preferences]
//! price_alerts = true
//! ```
//!
//! Every key is optional.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_DEBOUNCE_MS: u64 = 400;
pub const DEFAULT_LOG_FILTER: &str = "info,agromarket_flow=debug,agromarket_runtime=debug";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub telemetry: TelemetryConfig,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Settings-screen switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub notifications: bool,
    pub email_alerts: bool,
    pub price_alerts: bool,
    pub biometrics: bool,
    pub data_sync: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            email_alerts: true,
            price_alerts: false,
            biometrics: false,
            data_sync: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Notifications,
    EmailAlerts,
    PriceAlerts,
    Biometrics,
    DataSync,
}

impl Preferences {
    pub fn get(&self, key: Preference) -> bool {
        match key {
            Preference::Notifications => self.notifications,
            Preference::EmailAlerts => self.email_alerts,
            Preference::PriceAlerts => self.price_alerts,
            Preference::Biometrics => self.biometrics,
            Preference::DataSync => self.data_sync,
        }
    }

    /// Flips one switch and returns its new value.
    pub fn toggle(&mut self, key: Preference) -> bool {
        let slot = match key {
            Preference::Notifications => &mut self.notifications,
            Preference::EmailAlerts => &mut self.email_alerts,
            Preference::PriceAlerts => &mut self.price_alerts,
            Preference::Biometrics => &mut self.biometrics,
            Preference::DataSync => &mut self.data_sync,
        };
        *slot = !*slot;
        debug!(?key, value = *slot, "preference toggled");
        *slot
    }
}

impl AppConfig {
    pub fn from_toml(src: &str, origin: &str) -> CoreResult<Self> {
        toml::from_str(src).map_err(|source| CoreError::ConfigParse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let src = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigIo {
            path: display.clone(),
            source,
        })?;
        Self::from_toml(&src, &display)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "using default config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.search.debounce(), Duration::from_millis(400));
        assert!(config.preferences.notifications);
        assert!(!config.preferences.price_alerts);
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml("[preferences]\nprice_alerts = true\n", "inline").unwrap();
        assert!(config.preferences.price_alerts);
        assert!(config.preferences.data_sync);
        assert_eq!(config.search.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[search]\ndebounce_ms = 250").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.search.debounce_ms, 250);
    }

    #[test]
    fn test_load_or_default_on_bad_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[search]\ndebounce_ms = \"soon\"").unwrap();

        assert!(matches!(
            AppConfig::load(file.path()),
            Err(CoreError::ConfigParse { .. })
        ));
        assert_eq!(AppConfig::load_or_default(file.path()), AppConfig::default());
        assert_eq!(
            AppConfig::load_or_default("/nonexistent/agromarket.toml"),
            AppConfig::default()
        );
    }

    #[test]
    fn test_toggle_preference() {
        let mut prefs = Preferences::default();
        assert!(prefs.toggle(Preference::Biometrics));
        assert!(prefs.get(Preference::Biometrics));
        assert!(!prefs.toggle(Preference::Notifications));
        assert!(prefs.email_alerts);
    }
}
