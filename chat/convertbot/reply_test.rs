use convertbot::Error;
use convertbot::conversion::ConversionResult;
use convertbot::exchange_rates_api::ApiError;
use convertbot::rate_table::RateTable;
use convertbot::reply;

#[test]
fn conversion_text() {
    let result = ConversionResult {
        amount: 100.0,
        from: "USD".to_string(),
        to: "GBP".to_string(),
        converted: 100.0 / 1.1 * 0.85,
    };
    assert_eq!(reply::conversion(&result), "100.0 USD = 77.27 GBP");
}

#[test]
fn conversion_keeps_fractional_amount() {
    let result = ConversionResult {
        amount: 12.5,
        from: "EUR".to_string(),
        to: "JPY".to_string(),
        converted: 2031.0,
    };
    assert_eq!(reply::conversion(&result), "12.5 EUR = 2031.00 JPY");
}

#[test]
fn rates_listing() {
    let table = RateTable::new(
        "EUR",
        [
            ("USD".to_string(), 1.1),
            ("EUR".to_string(), 1.0),
            ("GBP".to_string(), 0.85),
        ],
    );
    assert_eq!(
        reply::rates(&table),
        "Текущие курсы валют (базовая валюта EUR):\n\
         EUR: 1.0\n\
         GBP: 0.85\n\
         USD: 1.1"
    );
}

#[test]
fn error_texts() {
    assert_eq!(
        reply::error(&Error::Structure),
        "Ошибка в формате команды. Используйте /convert <amount> <from_currency> to <to_currency>"
    );
    assert_eq!(
        reply::error(&Error::Amount("abc".to_string())),
        "Ошибка в формате количества или валюты. Проверьте ввод."
    );
    assert_eq!(
        reply::error(&Error::CurrencyFormat("42".to_string())),
        "Ошибка в формате количества или валюты. Проверьте ввод."
    );
    assert_eq!(
        reply::error(&Error::Status(reqwest::StatusCode::UNAUTHORIZED)),
        "Не удалось получить данные от API."
    );
    assert_eq!(
        reply::error(&Error::Rejected(ApiError::default())),
        "Не удалось получить данные от API."
    );
    assert_eq!(
        reply::error(&Error::CurrencyNotFound("XXX".to_string())),
        "Одна из валют не найдена."
    );
    assert_eq!(
        reply::error(&Error::Unexpected("boom".into())),
        "Произошла ошибка: boom"
    );
}

#[test]
fn decode_errors_carry_their_detail() {
    let deserializer = &mut serde_json::Deserializer::from_str(r#"{"base": "EUR"}"#);
    let error = serde_path_to_error::deserialize::<_, convertbot::exchange_rates_api::RatesResponse>(
        deserializer,
    )
    .unwrap_err();
    let text = reply::error(&Error::Decode(error));
    assert!(text.starts_with("Произошла ошибка: "), "{}", text);
    assert!(text.contains("missing field `rates`"), "{}", text);
}

#[test]
fn static_texts_list_every_command() {
    for text in [reply::WELCOME, reply::HELP] {
        for command in ["/convert", "/rates", "/help"] {
            assert!(text.contains(command), "{} missing in {}", command, text);
        }
    }
    assert!(reply::HELP.contains("/start"));
    assert!(reply::WELCOME.contains("Пример: /convert 100 USD to EUR"));
}
