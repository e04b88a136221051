//! Currency conversion bot: parses `/convert` and `/rates` commands, fetches
//! a rate table from an exchangeratesapi-style provider and formats replies.

pub mod command;
pub mod config;
pub mod conversion;
pub mod error;
pub mod exchange_rates_api;
pub mod flags;
pub mod rate_source;
pub mod rate_table;
pub mod reply;
pub mod responder;
pub mod telegram;

pub use error::{Error, ErrorKind};
