use crate::exchange_rates_api::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Credentials, read from `TOKEN` and `API_KEY`.
#[derive(Deserialize)]
pub struct Secrets {
    /// Telegram bot token.
    pub token: String,
    /// Access key for the rates provider.
    pub api_key: String,
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("token", &"<redacted>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Secrets {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::checked(envy::from_env::<Secrets>())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::checked(envy::from_iter::<_, Secrets>(vars))
    }

    fn checked(parsed: Result<Secrets, envy::Error>) -> Result<Self, Box<dyn Error>> {
        let secrets = parsed.map_err(|e| format!("bad environment: {}", e))?;
        if secrets.token.trim().is_empty() {
            return Err("TOKEN is empty".into());
        }
        if secrets.api_key.trim().is_empty() {
            return Err("API_KEY is empty".into());
        }
        Ok(secrets)
    }
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// `latest` endpoint of the rates provider.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Base currency of every fetched table.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_base_currency() -> String {
    "EUR".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            endpoint: default_endpoint(),
            base_currency: default_base_currency(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.endpoint)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, Box<dyn Error>> {
    match path {
        None => Ok(Settings::default()),
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            Ok(toml::from_str(&text)?)
        }
    }
}
