//! Storefront configuration
//!
//! Every field has a default matching the canteen's current setup, so an
//! empty TOML document is a valid configuration.
//!
//! ```toml
//! currency_symbol = "₹"
//! tax_rate_bps = 500
//!
//! [pickup]
//! start = "09:30"
//! end = "15:45"
//! step_minutes = 15
//!
//! [otp]
//! seed = 42
//!
//! [logging]
//! level = "debug"
//! json = true
//! ```

use crate::error::{ConfigError, SlotError};
use crate::pricing::TaxRate;
use crate::slots::{SlotWindow, TimeOfDay};
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Prefix for amounts
    pub currency_symbol: String,
    /// Sales tax in basis points
    pub tax_rate_bps: u32,
    /// Minimum sign-up password length
    pub min_password_len: usize,
    /// Delay standing in for account network calls
    pub simulated_latency_ms: u64,
    /// Theme at start
    pub theme: ThemeMode,
    /// Pickup window
    pub pickup: PickupConfig,
    /// Pickup code generation
    pub otp: OtpConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// Pickup window settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickupConfig {
    /// First pickup start, `HH:MM`
    pub start: TimeOfDay,
    /// Last pickup start, `HH:MM`
    pub end: TimeOfDay,
    /// Minutes between slots
    pub step_minutes: u32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            start: SlotWindow::DEFAULT_START,
            end: SlotWindow::DEFAULT_END,
            step_minutes: SlotWindow::DEFAULT_STEP_MINUTES,
        }
    }
}

/// Pickup code settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OtpConfig {
    /// Fixed seed for reproducible codes; OS entropy when absent
    pub seed: Option<u64>,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl StorefrontConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML and validate
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or values are inconsistent
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// Returns error if the file is unreadable or invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&text)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    /// Returns error describing the first problem
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.slot_window()?;
        if self.tax_rate_bps > 10_000 {
            return Err(ConfigError::Invalid(format!(
                "tax_rate_bps {} exceeds 100%",
                self.tax_rate_bps
            )));
        }
        if self.min_password_len == 0 {
            return Err(ConfigError::Invalid(
                "min_password_len must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Pickup window
    ///
    /// # Errors
    /// Returns error if the window is inverted or has a zero step
    pub fn slot_window(&self) -> Result<SlotWindow, SlotError> {
        SlotWindow::new(self.pickup.start, self.pickup.end, self.pickup.step_minutes)
    }

    /// Tax rate
    #[inline]
    #[must_use]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Simulated network delay
    #[inline]
    #[must_use]
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// With fixed OTP seed
    #[inline]
    #[must_use]
    pub fn with_otp_seed(mut self, seed: u64) -> Self {
        self.otp.seed = Some(seed);
        self
    }

    /// With tax rate
    #[inline]
    #[must_use]
    pub fn with_tax_rate_bps(mut self, bps: u32) -> Self {
        self.tax_rate_bps = bps;
        self
    }

    /// With pickup window
    #[inline]
    #[must_use]
    pub fn with_pickup_window(mut self, window: SlotWindow) -> Self {
        self.pickup = PickupConfig {
            start: window.start(),
            end: window.end(),
            step_minutes: window.step_minutes(),
        };
        self
    }

    /// With simulated latency
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With log level
    #[inline]
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            tax_rate_bps: TaxRate::DEFAULT.bps(),
            min_password_len: 6,
            simulated_latency_ms: 1000,
            theme: ThemeMode::Light,
            pickup: PickupConfig::default(),
            otp: OtpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
