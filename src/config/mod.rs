// src/config/mod.rs
// All values come from the environment (or a .env file); unset keys fall
// back to defaults.

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct VitalsConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub service_name: String,

    // ── Walkthrough Configuration
    pub tour_pause_ms: u64,
    pub list_preview: usize,

    // ── Logging Configuration
    pub debug_logging: bool,
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        // Not an error, just a missing variable
        Err(_) => default,
    }
}

impl VitalsConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        let _ = dotenvy::dotenv();

        Self {
            host: env_var_or("VITALS_HOST", "0.0.0.0".to_string()),
            port: env_var_or("VITALS_PORT", 5000),
            service_name: env_var_or("VITALS_SERVICE_NAME", "vitals".to_string()),
            tour_pause_ms: env_var_or("VITALS_TOUR_PAUSE_MS", 500),
            list_preview: env_var_or("VITALS_LIST_PREVIEW", 10),
            debug_logging: env_var_or("VITALS_DEBUG_LOGGING", false),
            log_level: env_var_or("VITALS_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pause between walkthrough examples
    pub fn tour_pause(&self) -> Duration {
        Duration::from_millis(self.tour_pause_ms)
    }

    /// Check if debug logging is enabled
    pub fn is_debug(&self) -> bool {
        self.debug_logging || self.log_level.to_lowercase() == "debug"
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<VitalsConfig> = Lazy::new(VitalsConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = VitalsConfig::from_env();

        assert_eq!(config.port, 5000);
        assert_eq!(config.service_name, "vitals");
        assert_eq!(config.tour_pause_ms, 500);
        assert!(!config.debug_logging);
    }

    #[test]
    fn test_convenience_methods() {
        let config = VitalsConfig::from_env();

        assert_eq!(config.bind_address(), format!("{}:{}", config.host, config.port));
        assert_eq!(config.tour_pause(), Duration::from_millis(config.tour_pause_ms));
        assert!(!config.is_debug());
    }

    #[test]
    fn test_env_parse_failure_falls_back() {
        // set_var is unsafe with concurrent readers; the key is unique to
        // this test
        unsafe { std::env::set_var("VITALS_TEST_BOGUS_NUMBER", "not-a-number") };

        assert_eq!(env_var_or("VITALS_TEST_BOGUS_NUMBER", 42u16), 42);

        unsafe { std::env::remove_var("VITALS_TEST_BOGUS_NUMBER") };
    }

    #[test]
    fn test_env_value_with_comment() {
        unsafe { std::env::set_var("VITALS_TEST_COMMENTED_NUMBER", "7 # retries") };

        assert_eq!(env_var_or("VITALS_TEST_COMMENTED_NUMBER", 0u16), 7);

        unsafe { std::env::remove_var("VITALS_TEST_COMMENTED_NUMBER") };
    }
}
