use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::display::{BaseCurrency, CurrencyCode, DisplayError, LocalCurrencyCode};

/// make sure variants of currency checked
#[test]
fn test_currency_items() {
    assert_eq!(BaseCurrency::iter().count(), 2);
    assert_eq!(LocalCurrencyCode::iter().count(), 15);
}

#[test]
fn test_base_currency() {
    assert_eq!(BaseCurrency::Dollar.code(), "cUSD");
    assert_eq!(BaseCurrency::Gold.code(), "cGLD");

    assert_eq!(BaseCurrency::Dollar.symbol(), Some("$"));
    assert_eq!(BaseCurrency::Gold.symbol(), None);

    assert_eq!(BaseCurrency::Dollar.display_decimals(), 2);
    assert_eq!(BaseCurrency::Gold.display_decimals(), 3);

    assert_eq!(BaseCurrency::from_str("cGLD").unwrap(), BaseCurrency::Gold);
    assert!(BaseCurrency::from_str("GLD").is_err());
}

#[test]
fn test_local_currency_code() {
    assert_eq!(LocalCurrencyCode::USD.code(), "USD");
    assert_eq!(LocalCurrencyCode::PHP.code(), "PHP");
    assert_eq!(LocalCurrencyCode::KES.code(), "KES");

    assert_eq!(LocalCurrencyCode::EUR.symbol(), "€");
    assert_eq!(LocalCurrencyCode::PHP.symbol(), "₱");
    assert_eq!(LocalCurrencyCode::MXN.symbol(), "$");

    assert_eq!(LocalCurrencyCode::default(), LocalCurrencyCode::USD);

    // every variant maps onto its own ISO code
    for local in LocalCurrencyCode::iter() {
        assert_eq!(local.code(), format!("{:?}", local));
        assert_eq!(LocalCurrencyCode::from_str(local.code()).unwrap(), local);
    }
}

#[test]
fn test_currency_code_from_str() {
    let ret = CurrencyCode::from_str("cUSD");
    assert_eq!(ret.unwrap(), CurrencyCode::Base(BaseCurrency::Dollar));

    let ret = CurrencyCode::from_str("EUR");
    assert_eq!(ret.unwrap(), CurrencyCode::Local(LocalCurrencyCode::EUR));

    let ret = CurrencyCode::from_str("XYZ");
    assert!(matches!(ret, Err(DisplayError::ClientError(_))));
    assert!(ret.unwrap_err().to_string().contains("unknown currency code"));
}

#[test]
fn test_currency_code_lookups() {
    let gold = CurrencyCode::Base(BaseCurrency::Gold);
    let dollar = CurrencyCode::Base(BaseCurrency::Dollar);
    let php = CurrencyCode::Local(LocalCurrencyCode::PHP);

    assert!(gold.is_gold());
    assert!(!dollar.is_gold());
    assert!(!php.is_gold());

    assert_eq!(gold.display_currency(), BaseCurrency::Gold);
    assert_eq!(dollar.display_currency(), BaseCurrency::Dollar);
    assert_eq!(php.display_currency(), BaseCurrency::Dollar);

    assert_eq!(dollar.symbol(), Some("$"));
    assert_eq!(php.symbol(), Some("₱"));
    assert_eq!(gold.symbol(), None);
}

#[test]
fn test_currency_code_serde() {
    let ret = serde_json::to_string(&CurrencyCode::Base(BaseCurrency::Gold)).unwrap();
    assert_eq!(ret, "\"cGLD\"");

    let ret: CurrencyCode = serde_json::from_str("\"CAD\"").unwrap();
    assert_eq!(ret, CurrencyCode::Local(LocalCurrencyCode::CAD));

    let ret: CurrencyCode = serde_json::from_str("\"cUSD\"").unwrap();
    assert_eq!(ret, CurrencyCode::Base(BaseCurrency::Dollar));
}
