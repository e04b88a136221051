use crate::command::ConversionRequest;
use crate::error::Error;
use crate::rate_table::RateTable;

#[derive(Debug, PartialEq, Clone)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted: f64,
}

/// Converts through the table's base currency: the provider only quotes
/// rates relative to a single base, never pairwise.
pub fn convert(table: &RateTable, request: &ConversionRequest) -> Result<ConversionResult, Error> {
    let from_rate = table.rate(&request.from)?;
    let to_rate = table.rate(&request.to)?;

    let in_base = request.amount / from_rate;
    Ok(ConversionResult {
        amount: request.amount,
        from: request.from.clone(),
        to: request.to.clone(),
        converted: in_base * to_rate,
    })
}
