use crate::command::parse_conversion;
use crate::conversion::convert;
use crate::error::{Error, ErrorKind};
use crate::rate_source::RateSource;
use crate::reply;
use crate::telegram::Command;
use log::{info, warn};
use std::sync::Arc;

/// Turns commands into reply texts. Every failure ends up as a reply here;
/// nothing is passed on to the dispatcher.
pub struct Responder {
    source: Arc<dyn RateSource>,
    /// Base currency used for every fetch, for `/convert` and `/rates` alike.
    base: String,
}

impl Responder {
    pub fn new(source: Arc<dyn RateSource>, base: impl Into<String>) -> Self {
        Responder {
            source,
            base: base.into().to_ascii_uppercase(),
        }
    }

    /// `text` is the whole message the command came in.
    pub async fn respond(&self, command: &Command, text: &str) -> String {
        let outcome = match command {
            Command::Start => Ok(reply::WELCOME.to_string()),
            Command::Help => Ok(reply::HELP.to_string()),
            Command::Convert(_) => self.convert(text).await,
            Command::Rates => self.rates().await,
        };

        match outcome {
            Ok(text) => {
                info!("{:?}: ok", command);
                text
            }
            Err(error) => {
                match error.kind() {
                    ErrorKind::Fetch | ErrorKind::Unexpected => {
                        warn!("{:?}: {}", command, error)
                    }
                    _ => info!("{:?}: {}", command, error),
                }
                reply::error(&error)
            }
        }
    }

    async fn convert(&self, text: &str) -> Result<String, Error> {
        // Parse first: a malformed command never costs a request.
        let request = parse_conversion(text)?;
        let table = self.source.latest(&self.base).await?;
        let result = convert(&table, &request)?;
        Ok(reply::conversion(&result))
    }

    async fn rates(&self) -> Result<String, Error> {
        let table = self.source.latest(&self.base).await?;
        Ok(reply::rates(&table))
    }
}
