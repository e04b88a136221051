// RUST_LOG=convertbot=debug TOKEN=... API_KEY=... cargo run -- --config bot.toml

use convertbot::config::{Secrets, load_settings};
use convertbot::exchange_rates_api::ExchangeRatesApi;
use convertbot::flags::Opt;
use convertbot::responder::Responder;
use convertbot::telegram;
use log::{info, trace};
use std::error::Error;
use std::sync::Arc;
use structopt::StructOpt;
use teloxide::Bot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A .env file is optional; real environment variables win.
    dotenv::dotenv().ok();
    env_logger::init();
    let opt = Opt::from_args();
    trace!("Options: {:?}", opt);

    let mut settings = load_settings(opt.config.as_deref())?;
    if let Some(base) = opt.base {
        settings.base_currency = base;
    }
    trace!("Settings: {:?}", settings);

    let secrets = Secrets::from_env()?;

    // One client for the whole process; requests share its connection pool.
    let client = reqwest::Client::builder()
        .timeout(settings.timeout())
        .build()?;
    let source = ExchangeRatesApi::new(client, settings.endpoint_url()?, secrets.api_key);
    let responder = Arc::new(Responder::new(Arc::new(source), &settings.base_currency));

    info!(
        "starting bot, rates from {} with base {}",
        settings.endpoint, settings.base_currency
    );
    telegram::run(Bot::new(secrets.token), responder).await;
    info!("bot stopped");
    Ok(())
}
