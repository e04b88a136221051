use crate::error::Error;
use log::warn;
use std::collections::BTreeMap;

/// Snapshot of rates relative to `base`: if base = EUR and rates[USD] = 1.1,
/// then 1 EUR is 1.1 USD. Lives for a single command.
#[derive(Debug, PartialEq, Clone)]
pub struct RateTable {
    pub base: String,
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// Rates that are not finite and positive are dropped; they cannot
    /// be divided by.
    pub fn new(base: impl Into<String>, rates: impl IntoIterator<Item = (String, f64)>) -> Self {
        let base = base.into();
        let rates = rates
            .into_iter()
            .filter(|(currency, rate)| {
                let usable = rate.is_finite() && *rate > 0.0;
                if !usable {
                    warn!("dropping unusable rate {} {} = {}", base, currency, rate);
                }
                usable
            })
            .collect();
        RateTable { base, rates }
    }

    pub fn rate(&self, currency: &str) -> Result<f64, Error> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| Error::CurrencyNotFound(currency.to_string()))
    }

    /// Rates ordered by currency code.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(currency, rate)| (currency.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
