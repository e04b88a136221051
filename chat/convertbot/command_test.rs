use convertbot::Error;
use convertbot::command::{ConversionRequest, parse_conversion};

#[test]
fn parses_well_formed_command() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(
        parse_conversion("/convert 100 usd to eur").unwrap(),
        ConversionRequest {
            amount: 100.0,
            from: "USD".to_string(),
            to: "EUR".to_string(),
        }
    );
}

#[test]
fn keyword_is_case_insensitive_and_whitespace_is_loose() {
    let _ = env_logger::builder().is_test(true).try_init();
    let request = parse_conversion("  /convert@somebot\t12.5  Gbp TO  jpy \n").unwrap();
    assert_eq!(request.amount, 12.5);
    assert_eq!(request.from, "GBP");
    assert_eq!(request.to, "JPY");
}

#[test]
fn missing_keyword_is_structural() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert!(matches!(
        parse_conversion("/convert 100 USD EUR"),
        Err(Error::Structure)
    ));
    assert!(matches!(
        parse_conversion("/convert 100 USD into EUR"),
        Err(Error::Structure)
    ));
}

#[test]
fn wrong_token_count_is_structural() {
    let _ = env_logger::builder().is_test(true).try_init();
    for text in [
        "/convert",
        "/convert 100",
        "/convert 100 USD to",
        "/convert 100 USD to EUR now",
    ] {
        assert!(
            matches!(parse_conversion(text), Err(Error::Structure)),
            "{:?}",
            text
        );
    }
}

#[test]
fn bad_amount_is_numeric() {
    let _ = env_logger::builder().is_test(true).try_init();
    for text in [
        "/convert abc USD to EUR",
        "/convert 1,5 USD to EUR",
        "/convert inf USD to EUR",
        "/convert NaN USD to EUR",
    ] {
        assert!(
            matches!(parse_conversion(text), Err(Error::Amount(_))),
            "{:?}",
            text
        );
    }
}

#[test]
fn bad_currency_is_numeric() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert!(matches!(
        parse_conversion("/convert 100 U$D to EUR"),
        Err(Error::CurrencyFormat(_))
    ));
    assert!(matches!(
        parse_conversion("/convert 100 USD to 42"),
        Err(Error::CurrencyFormat(_))
    ));
}

#[test]
fn structure_is_checked_before_amount() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert!(matches!(
        parse_conversion("/convert abc USD EUR"),
        Err(Error::Structure)
    ));
}
