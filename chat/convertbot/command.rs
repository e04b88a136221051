use crate::error::Error;
use log::trace;

#[derive(Debug, PartialEq, Clone)]
pub struct ConversionRequest {
    pub amount: f64,
    /// Uppercased currency code, e.g. "USD".
    pub from: String,
    pub to: String,
}

/// Parses the full text of a conversion command:
/// `/convert <amount> <from> to <to>`.
///
/// The first token is the command itself (possibly `/convert@somebot`) and
/// is not inspected. Currency codes are uppercased but not checked against
/// any list of known currencies; that happens when the rate table is
/// consulted.
pub fn parse_conversion(text: &str) -> Result<ConversionRequest, Error> {
    let args: Vec<&str> = text.split_whitespace().collect();
    trace!("conversion args: {:?}", args);

    let [_command, amount, from, keyword, to] = args.as_slice() else {
        return Err(Error::Structure);
    };
    if !keyword.eq_ignore_ascii_case("to") {
        return Err(Error::Structure);
    }

    Ok(ConversionRequest {
        amount: parse_amount(amount)?,
        from: parse_currency(from)?,
        to: parse_currency(to)?,
    })
}

fn parse_amount(token: &str) -> Result<f64, Error> {
    match token.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::Amount(token.to_string())),
    }
}

fn parse_currency(token: &str) -> Result<String, Error> {
    if token.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(token.to_ascii_uppercase())
    } else {
        Err(Error::CurrencyFormat(token.to_string()))
    }
}
