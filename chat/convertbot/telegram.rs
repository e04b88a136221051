use crate::responder::Responder;
use log::{info, warn};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ReplyParameters;
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "приветствие и инструкция по использованию")]
    Start,
    #[command(description = "список команд")]
    Help,
    // Arguments are re-parsed from the full message text.
    #[command(description = "конвертация валюты, например /convert 100 USD to EUR")]
    Convert(String),
    #[command(description = "текущие курсы валют")]
    Rates,
}

/// Long-polls Telegram until the process is interrupted.
pub async fn run(bot: Bot, responder: Arc<Responder>) {
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("could not register the command list: {}", e);
    }

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(answer);

    info!("polling for updates");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![responder])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn answer(
    bot: Bot,
    msg: Message,
    command: Command,
    responder: Arc<Responder>,
) -> ResponseResult<()> {
    let text = msg.text().unwrap_or_default();
    let reply = responder.respond(&command, text).await;
    bot.send_message(msg.chat.id, reply)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;
    Ok(())
}
