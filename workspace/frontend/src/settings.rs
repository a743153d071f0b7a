use log::Level;
use ternak_common::DEFAULT_HISTORY_DAYS;
use wasm_bindgen::JsValue;
use web_sys::window;

const KEY_API_BASE_URL: &str = "ternak_api_base_url";
const KEY_HISTORY_DAYS: &str = "ternak_history_days";
const KEY_REFRESH_DELAY: &str = "ternak_history_refresh_delay_ms";
const KEY_LOG_LEVEL: &str = "ternak_log_level";
const KEY_TOAST_DURATION: &str = "ternak_toast_duration_ms";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend base URL without trailing slash. Empty means the page's own origin.
    pub api_base_url: String,

    /// Days of revenue history requested for the chart
    pub history_days: u32,

    /// Wait before reloading history after a prediction, giving the backend
    /// time to persist the new entry. Zero reloads immediately.
    pub history_refresh_delay_ms: u32,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            history_days: DEFAULT_HISTORY_DAYS,
            history_refresh_delay_ms: 1000,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

pub fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(base_url)) = storage.get_item(KEY_API_BASE_URL) {
                settings.api_base_url = base_url.trim().trim_end_matches('/').to_string();
            }

            if let Ok(Some(days)) = storage.get_item(KEY_HISTORY_DAYS) {
                if let Ok(days) = days.parse::<u32>() {
                    if days > 0 {
                        settings.history_days = days;
                    }
                }
            }

            if let Ok(Some(delay)) = storage.get_item(KEY_REFRESH_DELAY) {
                if let Ok(delay) = delay.parse::<u32>() {
                    settings.history_refresh_delay_ms = delay;
                }
            }

            if let Ok(Some(log_level)) = storage.get_item(KEY_LOG_LEVEL) {
                if let Some(level) = parse_log_level(&log_level) {
                    settings.log_level = level;
                }
            }

            if let Ok(Some(duration)) = storage.get_item(KEY_TOAST_DURATION) {
                if let Ok(duration) = duration.parse::<u32>() {
                    settings.toast_duration_ms = duration;
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(KEY_API_BASE_URL, &self.api_base_url)?;
                storage.set_item(KEY_HISTORY_DAYS, &self.history_days.to_string())?;
                storage.set_item(KEY_REFRESH_DELAY, &self.history_refresh_delay_ms.to_string())?;
                storage.set_item(KEY_LOG_LEVEL, &self.log_level.to_string().to_lowercase())?;
                storage.set_item(KEY_TOAST_DURATION, &self.toast_duration_ms.to_string())?;
            }
        }
        Ok(())
    }

    /// Builds updated settings from the settings form. `field` returns the
    /// raw text of a named input, empty when absent. `debug_mode` is kept.
    pub fn with_form_fields<F>(&self, field: F) -> Result<AppSettings, String>
    where
        F: Fn(&str) -> String,
    {
        let positive = |name: &str, message: &str| {
            field(name)
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or_else(|| message.to_string())
        };

        let history_days = positive(
            "history_days",
            "Rentang riwayat harus berupa bilangan bulat positif",
        )?;
        let history_refresh_delay_ms = field("history_refresh_delay_ms")
            .trim()
            .parse::<u32>()
            .map_err(|_| "Jeda penyegaran harus berupa bilangan bulat".to_string())?;
        let toast_duration_ms = positive(
            "toast_duration_ms",
            "Durasi notifikasi harus berupa bilangan bulat positif",
        )?;

        Ok(AppSettings {
            api_base_url: field("api_base_url").trim().trim_end_matches('/').to_string(),
            history_days,
            history_refresh_delay_ms,
            log_level: parse_log_level(&field("log_level")).unwrap_or(self.log_level),
            debug_mode: self.debug_mode,
            toast_duration_ms,
        })
    }

    /// Get the full API URL for an endpoint path such as `/predict`
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
