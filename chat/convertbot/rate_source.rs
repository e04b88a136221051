use crate::error::Error;
use crate::rate_table::RateTable;
use async_trait::async_trait;

/// Something that can produce a fresh [`RateTable`] for a base currency.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn latest(&self, base: &str) -> Result<RateTable, Error>;
}
