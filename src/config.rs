use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not a valid socket address: {1}")]
    InvalidAddr(&'static str, String),
    #[error("{0} must be a whole number of seconds: {1}")]
    InvalidSeconds(&'static str, String),
    #[error("STORE_URL and STORE_ANON_KEY must be set together")]
    PartialStore,
}

/// Connection to the hosted record store. Absent means in-memory stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: Option<StoreConfig>,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr("BIND_ADDR", raw_addr.clone()))?;

        let timeout = match var("STORE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeconds("STORE_TIMEOUT_SECS", raw.clone()))?,
            None => DEFAULT_STORE_TIMEOUT_SECS,
        };

        let store = match (var("STORE_URL"), var("STORE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(StoreConfig {
                url,
                anon_key,
                access_token: var("STORE_ACCESS_TOKEN"),
                timeout: Duration::from_secs(timeout),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialStore),
        };

        Ok(Self { bind_addr, store })
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[rstest]
    fn it_should_default_to_in_memory_on_port_8080() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.store, None);
    }

    #[rstest]
    fn it_should_read_the_store_connection() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("STORE_URL", "https://project.example.co"),
            ("STORE_ANON_KEY", "anon"),
            ("STORE_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(
            config.store,
            Some(StoreConfig {
                url: "https://project.example.co".to_string(),
                anon_key: "anon".to_string(),
                access_token: None,
                timeout: Duration::from_secs(3),
            })
        );
    }

    #[rstest]
    #[case(&[("STORE_URL", "https://project.example.co")])]
    #[case(&[("STORE_ANON_KEY", "anon")])]
    fn it_should_reject_half_a_store_connection(#[case] vars: &[(&str, &str)]) {
        assert_eq!(
            AppConfig::from_lookup(lookup(vars)),
            Err(ConfigError::PartialStore)
        );
    }

    #[rstest]
    fn it_should_treat_blank_values_as_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[("STORE_URL", " "), ("BIND_ADDR", "")])).unwrap();
        assert_eq!(config.store, None);
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[rstest]
    #[case(&[("BIND_ADDR", "localhost")], ConfigError::InvalidAddr("BIND_ADDR", "localhost".into()))]
    #[case(&[("STORE_TIMEOUT_SECS", "ten")], ConfigError::InvalidSeconds("STORE_TIMEOUT_SECS", "ten".into()))]
    fn it_should_reject_malformed_values(
        #[case] vars: &[(&str, &str)],
        #[case] expected: ConfigError,
    ) {
        assert_eq!(AppConfig::from_lookup(lookup(vars)), Err(expected));
    }
}
