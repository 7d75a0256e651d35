//! Runtime configuration.
//!
//! Defaults match the original deployment: the stats endpoint listens on
//! port 5000 and the dashboard polls it every 5 seconds.

/// Fixed path of the stats endpoint.
pub const STATS_PATH: &str = "/get_system_stats";

/// Poll interval in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 5000;

/// Default endpoint base URL for monitor mode.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Default listen address for serve mode.
pub const DEFAULT_LISTEN: &str = "0.0.0.0:5000";

/// Application configuration.
///
/// Use the builder methods to customize, or [`Config::from_env`] to pick up
/// `PIDASH_*` environment variables.
///
/// # Example
///
/// ```
/// use pidash::startup::Config;
///
/// let config = Config::default().with_endpoint("http://pi.local:5000");
/// assert_eq!(config.stats_url(), "http://pi.local:5000/get_system_stats");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the stats endpoint (without the stats path).
    pub endpoint: String,
    /// Poll interval in milliseconds.
    pub interval_ms: u64,
    /// Listen address for serve mode.
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval_ms: POLL_INTERVAL_MS,
            listen_addr: DEFAULT_LISTEN.to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint base URL. A trailing slash is stripped.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Set the poll interval in milliseconds.
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Set the serve-mode listen address.
    pub fn with_listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.listen_addr = addr.into();
        self
    }

    /// Full URL of the stats endpoint.
    pub fn stats_url(&self) -> String {
        format!("{}{}", self.endpoint, STATS_PATH)
    }

    /// Create config from `PIDASH_ENDPOINT`, `PIDASH_INTERVAL_MS`, and
    /// `PIDASH_LISTEN` environment variables, falling back to defaults.
    ///
    /// An unparseable `PIDASH_INTERVAL_MS` falls back to the default
    /// interval rather than failing startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("PIDASH_ENDPOINT") {
            if !endpoint.is_empty() {
                config = config.with_endpoint(endpoint);
            }
        }
        if let Ok(interval) = std::env::var("PIDASH_INTERVAL_MS") {
            if let Ok(ms) = interval.parse::<u64>() {
                config.interval_ms = ms;
            }
        }
        if let Ok(listen) = std::env::var("PIDASH_LISTEN") {
            if !listen.is_empty() {
                config.listen_addr = listen;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:5000");
        assert_eq!(config.interval_ms, 5000);
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_endpoint("http://pi.local:5000")
            .with_interval_ms(1000)
            .with_listen_addr("127.0.0.1:8080");

        assert_eq!(config.endpoint, "http://pi.local:5000");
        assert_eq!(config.interval_ms, 1000);
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_stats_url_joins_path() {
        let config = Config::default().with_endpoint("http://pi.local:5000");
        assert_eq!(config.stats_url(), "http://pi.local:5000/get_system_stats");
    }

    #[test]
    fn test_with_endpoint_strips_trailing_slash() {
        let config = Config::default().with_endpoint("http://pi.local:5000/");
        assert_eq!(config.stats_url(), "http://pi.local:5000/get_system_stats");
    }

    // Single test for env handling: tests run in parallel threads and the
    // process environment is shared, so all PIDASH_* mutation stays here.
    #[test]
    fn test_from_env() {
        std::env::set_var("PIDASH_ENDPOINT", "http://10.0.0.7:5000");
        std::env::set_var("PIDASH_INTERVAL_MS", "2500");
        std::env::set_var("PIDASH_LISTEN", "0.0.0.0:9000");

        let config = Config::from_env();
        assert_eq!(config.endpoint, "http://10.0.0.7:5000");
        assert_eq!(config.interval_ms, 2500);
        assert_eq!(config.listen_addr, "0.0.0.0:9000");

        // An unparseable interval falls back to the default
        std::env::set_var("PIDASH_INTERVAL_MS", "not-a-number");
        let config = Config::from_env();
        assert_eq!(config.interval_ms, POLL_INTERVAL_MS);

        std::env::remove_var("PIDASH_ENDPOINT");
        std::env::remove_var("PIDASH_INTERVAL_MS");
        std::env::remove_var("PIDASH_LISTEN");
    }
}
