use std::net::SocketAddr;

pub const BIND_ADDR_VAR: &str = "GAMES_API_BIND";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const LAMBDA_RUNTIME_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "api=info,shared=info,tower_http=info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_filter: String,
    /// Serve through the Lambda runtime instead of a TCP listener.
    pub lambda_runtime: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_bind_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                value: raw_bind_addr.clone(),
                reason: e.to_string(),
            })?;

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            bind_addr,
            log_filter,
            lambda_runtime: lookup(LAMBDA_RUNTIME_VAR).is_some(),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr { value: String, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBindAddr { value, reason } => {
                write!(f, "Invalid {} value '{}': {}", BIND_ADDR_VAR, value, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
