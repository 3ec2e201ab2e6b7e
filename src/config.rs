use std::{env, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/activities";

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub port: u16,
    /// Collection endpoint of the activities API, e.g. `http://host:8080/api/activities`.
    pub api_url: String,
    pub request_timeout: Option<Duration>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl AdminConfig {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(value) => value.parse::<u16>().unwrap_or_else(|err| {
                warn!("invalid PORT {value:?} ({err}), using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let api_url = env::var("ACTIVITIES_API_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = env::var("ACTIVITIES_API_TIMEOUT_MS").ok().and_then(|value| {
            match value.parse::<u64>() {
                Ok(ms) => Some(Duration::from_millis(ms)),
                Err(err) => {
                    warn!("invalid ACTIVITIES_API_TIMEOUT_MS {value:?} ({err}), requests will not time out");
                    None
                }
            }
        });

        Self {
            port,
            api_url,
            request_timeout,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
