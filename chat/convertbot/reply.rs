//! User-facing texts. The bot talks Russian only.

use crate::conversion::ConversionResult;
use crate::error::{Error, ErrorKind};
use crate::rate_table::RateTable;

pub const WELCOME: &str = "Привет! Я бот для конвертации валют.\n\n\
    Вот как ты можешь использовать меня:\n\n\
    /convert <amount> <from_currency> to <to_currency> - для конвертации валюты\n\
    Пример: /convert 100 USD to EUR\n\n\
    /rates - для получения текущих курсов валют\n\n\
    /help - для получения этой инструкции";

pub const HELP: &str = "Доступные команды:\n\n\
    /start - Приветствие и инструкция по использованию\n\
    /convert <amount> <from_currency> to <to_currency> - для конвертации валюты\n\
    Пример: /convert 100 USD to EUR\n\n\
    /rates - для получения текущих курсов валют\n\n\
    /help - для получения этой инструкции";

// "{:?}" prints the shortest representation that round-trips, keeping
// ".0" on whole numbers: 100.0 stays "100.0", 0.1 stays "0.1".

/// `100.0 USD = 77.27 GBP`
pub fn conversion(result: &ConversionResult) -> String {
    format!(
        "{:?} {} = {:.2} {}",
        result.amount, result.from, result.converted, result.to
    )
}

pub fn rates(table: &RateTable) -> String {
    let mut text = format!("Текущие курсы валют (базовая валюта {}):", table.base);
    for (currency, rate) in table.iter() {
        text.push_str(&format!("\n{}: {:?}", currency, rate));
    }
    text
}

pub fn error(error: &Error) -> String {
    match error.kind() {
        ErrorKind::Structure => "Ошибка в формате команды. \
            Используйте /convert <amount> <from_currency> to <to_currency>"
            .to_string(),
        ErrorKind::Numeric => "Ошибка в формате количества или валюты. Проверьте ввод.".to_string(),
        ErrorKind::Fetch => "Не удалось получить данные от API.".to_string(),
        ErrorKind::NotFound => "Одна из валют не найдена.".to_string(),
        ErrorKind::Unexpected => format!("Произошла ошибка: {}", error),
    }
}
