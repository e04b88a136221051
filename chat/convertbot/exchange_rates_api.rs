use crate::error::Error;
use crate::rate_source::RateSource;
use crate::rate_table::RateTable;
use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.exchangeratesapi.io/v1/latest";

/// Client for exchangeratesapi.io (and the fixer.io API it shares its
/// format with). Every call is a fresh request: no caching, no retries.
pub struct ExchangeRatesApi {
    client: reqwest::Client,
    endpoint: Url,
    access_key: String,
}

/// Body of a successful `latest` call.
#[derive(Debug, Deserialize)]
pub struct RatesResponse {
    pub base: String,
    // "date":"2021-02-20"
    #[serde(default)]
    pub date: Option<NaiveDate>,
    // "timestamp":1613851867
    #[serde(default)]
    pub timestamp: Option<i64>,
    pub rates: BTreeMap<String, f64>,
}

/// The part of a body that says whether the call worked at all.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default = "succeeded")]
    success: bool,
    #[serde(default)]
    error: Option<ApiError>,
}

fn succeeded() -> bool {
    true
}

/// Error object the provider sends along with `"success": false`.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct ApiError {
    pub code: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub info: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.code {
            write!(f, "[{}] ", code)?;
        }
        write!(f, "{}", self.kind.as_deref().unwrap_or("unknown_error"))?;
        if let Some(info) = &self.info {
            write!(f, ": {}", info)?;
        }
        Ok(())
    }
}

impl ExchangeRatesApi {
    pub fn new(client: reqwest::Client, endpoint: Url, access_key: impl Into<String>) -> Self {
        ExchangeRatesApi {
            client,
            endpoint,
            access_key: access_key.into(),
        }
    }

    fn request_url(&self, base: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("access_key", &self.access_key)
            .append_pair("base", base);
        url
    }
}

#[async_trait]
impl RateSource for ExchangeRatesApi {
    async fn latest(&self, base: &str) -> Result<RateTable, Error> {
        debug!("fetching rates with base {} from {}", base, self.endpoint);
        // Errors are stripped of their URL: it carries the access key.
        let response = self
            .client
            .get(self.request_url(base))
            .send()
            .await
            .map_err(|e| Error::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.without_url()))?;

        if !status.is_success() {
            if let Ok(Envelope {
                error: Some(error), ..
            }) = serde_json::from_slice::<Envelope>(&body)
            {
                warn!("rate provider answered {}: {}", status, error);
            }
            return Err(Error::Status(status));
        }

        let table = parse_rates(&body)?;
        if table.base != base {
            warn!("asked for base {} but got rates relative to {}", base, table.base);
        }
        Ok(table)
    }
}

/// Decodes a `latest` body with a 2xx status.
pub fn parse_rates(body: &[u8]) -> Result<RateTable, Error> {
    // The provider reports some failures with 200 and an error object.
    if let Ok(Envelope {
        success: false,
        error,
    }) = serde_json::from_slice::<Envelope>(body)
    {
        let error = error.unwrap_or_default();
        warn!("rate provider rejected the request: {}", error);
        return Err(Error::Rejected(error));
    }

    let deserializer = &mut serde_json::Deserializer::from_slice(body);
    let response: RatesResponse = serde_path_to_error::deserialize(deserializer)?;
    debug!(
        "got {} rates with base {} (date {:?}, timestamp {:?})",
        response.rates.len(),
        response.base,
        response.date,
        response.timestamp
    );

    Ok(RateTable::new(response.base, response.rates))
}
