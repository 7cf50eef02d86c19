//! Application configuration. Catalog source, booking window.

use serde::Deserialize;

/// Default upper bound for the date picker, in days from today. The lower
/// bound is always today.
pub const DEFAULT_BOOKING_WINDOW_DAYS: u32 = 90;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Optional path to a JSON catalog file; the embedded catalog is used
    /// when unset. Read from LEXBOOK_CATALOG.
    #[serde(default)]
    pub catalog: Option<String>,

    /// How many days ahead the date picker allows (default 90).
    /// Read from LEXBOOK_BOOKING_WINDOW_DAYS.
    #[serde(default)]
    pub booking_window_days: Option<u32>,
}

impl AppConfig {
    /// Reads from the environment; `main` loads .env beforehand.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("LEXBOOK"));
        if let Ok(path) = std::env::var("LEXBOOK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Numeric env values arrive as strings; parse explicitly.
        if let Ok(s) = std::env::var("LEXBOOK_BOOKING_WINDOW_DAYS") {
            if let Ok(days) = s.parse::<u32>() {
                cfg.booking_window_days = Some(days);
            }
        }
        Ok(cfg)
    }

    /// Returns the booking window in days. Defaults to 90 if unset.
    pub fn booking_window_days_or_default(&self) -> u32 {
        self.booking_window_days.unwrap_or(DEFAULT_BOOKING_WINDOW_DAYS)
    }
}
