use std::env;

/// Client configuration.
///
/// The orchestrator itself enforces no timeout; `timeout_secs` is handed to
/// the transport and applies to every call.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("TRIPAI_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            timeout_secs: env::var("TRIPAI_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("TRIPAI_TIMEOUT_SECS must be a valid number"),
        }
    }

    /// Config pointing at a specific backend, with the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_url_keeps_default_timeout() {
        let config = Config::with_base_url("http://127.0.0.1:9100");
        assert_eq!(config.base_url, "http://127.0.0.1:9100");
        assert_eq!(config.timeout_secs, 30);
    }
}
