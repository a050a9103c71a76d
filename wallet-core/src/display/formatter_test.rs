use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strum::IntoEnumIterator;

use crate::display::{format_value, BaseCurrency, DisplayError, FormatMode};

#[test]
fn test_format_mode_items() {
    assert_eq!(FormatMode::iter().count(), 6);
    assert_eq!(FormatMode::default(), FormatMode::Default);
}

#[test]
fn test_format_mode_parse() {
    for mode in FormatMode::iter() {
        let ret = FormatMode::parse(&mode.to_string());
        assert_eq!(ret.unwrap(), mode);
    }

    let ret = FormatMode::parse("Percent");
    assert!(matches!(ret, Err(DisplayError::ClientError(_))));
}

#[test]
fn test_default_dollar() {
    let dollar = BaseCurrency::Dollar;

    assert_eq!(format_value(dec!(10), FormatMode::Default, dollar), "10.00");
    assert_eq!(format_value(dec!(1234.5678), FormatMode::Default, dollar), "1,234.56");
    assert_eq!(format_value(dec!(0.999), FormatMode::Default, dollar), "0.99");
    // within tolerance of the next cent
    assert_eq!(format_value(dec!(0.9999), FormatMode::Default, dollar), "1.00");
    assert_eq!(format_value(dec!(1000000), FormatMode::Default, dollar), "1,000,000.00");
    assert_eq!(format_value(dec!(0), FormatMode::Default, dollar), "0.00");
}

#[test]
fn test_default_gold() {
    let gold = BaseCurrency::Gold;

    assert_eq!(format_value(dec!(10), FormatMode::Default, gold), "10.000");
    assert_eq!(format_value(dec!(1.23456), FormatMode::Default, gold), "1.234");
    assert_eq!(format_value(dec!(2.5), FormatMode::Default, gold), "2.500");
}

#[test]
fn test_sign_is_dropped() {
    assert_eq!(
        format_value(dec!(-1234.5), FormatMode::Default, BaseCurrency::Dollar),
        "1,234.50"
    );
    assert_eq!(
        format_value(dec!(-1.23456), FormatMode::ExchangeRate, BaseCurrency::Dollar),
        "1.2346"
    );
}

#[test]
fn test_cent_aware() {
    let dollar = BaseCurrency::Dollar;

    assert_eq!(format_value(dec!(10), FormatMode::CentAware, dollar), "10");
    assert_eq!(format_value(dec!(10.00), FormatMode::CentAware, dollar), "10");
    assert_eq!(format_value(dec!(10.5), FormatMode::CentAware, dollar), "10.50");
    assert_eq!(format_value(dec!(1234.565), FormatMode::CentAware, dollar), "1,234.57");
    assert_eq!(format_value(dec!(5000), FormatMode::CentAware, dollar), "5,000");
}

#[test]
fn test_fee() {
    let dollar = BaseCurrency::Dollar;

    assert_eq!(format_value(dec!(0.0001), FormatMode::Fee, dollar), "0.001");
    assert_eq!(format_value(dec!(1.2341), FormatMode::Fee, dollar), "1.235");
    assert_eq!(format_value(dec!(0.5), FormatMode::Fee, dollar), "0.500");
    assert_eq!(format_value(dec!(0), FormatMode::Fee, dollar), "0.000");
}

#[test]
fn test_network_fee() {
    let dollar = BaseCurrency::Dollar;

    assert_eq!(format_value(dec!(0.0004), FormatMode::NetworkFee, dollar), "<0.001");
    assert_eq!(format_value(dec!(0.0123), FormatMode::NetworkFee, dollar), "0.013");
    assert_eq!(format_value(dec!(0.001), FormatMode::NetworkFee, dollar), "0.001");
    assert_eq!(format_value(dec!(1.5), FormatMode::NetworkFee, dollar), "1.5");
    assert_eq!(format_value(dec!(0), FormatMode::NetworkFee, dollar), "0");
}

#[test]
fn test_network_fee_precise() {
    let dollar = BaseCurrency::Dollar;

    assert_eq!(
        format_value(dec!(0.0000004), FormatMode::NetworkFeePrecise, dollar),
        "<0.000001"
    );
    assert_eq!(format_value(dec!(0.0004), FormatMode::NetworkFeePrecise, dollar), "0.0004");
    assert_eq!(
        format_value(dec!(0.00012341), FormatMode::NetworkFeePrecise, dollar),
        "0.000124"
    );
}

#[test]
fn test_exchange_rate() {
    let dollar = BaseCurrency::Dollar;

    assert_eq!(format_value(dec!(1.23456), FormatMode::ExchangeRate, dollar), "1.2346");
    assert_eq!(format_value(dec!(2), FormatMode::ExchangeRate, dollar), "2");
    assert_eq!(format_value(dec!(0.10), FormatMode::ExchangeRate, dollar), "0.1");
    assert_eq!(format_value(dec!(12345.5), FormatMode::ExchangeRate, dollar), "12,345.5");
}

#[test]
fn test_mode_ignores_currency_except_default() {
    for mode in FormatMode::iter().filter(|m| *m != FormatMode::Default) {
        assert_eq!(
            mode.format(dec!(3.14159), BaseCurrency::Gold),
            mode.format(dec!(3.14159), BaseCurrency::Dollar),
            "mode {} depends on currency",
            mode
        );
    }
}

#[test]
fn test_fixed_decimals_at_max_value() {
    assert_eq!(
        format_value(Decimal::MAX, FormatMode::Default, BaseCurrency::Gold),
        "79,228,162,514,264,337,593,543,950,335.000"
    );
    assert_eq!(
        format_value(Decimal::MIN, FormatMode::Fee, BaseCurrency::Dollar),
        "79,228,162,514,264,337,593,543,950,335.000"
    );
}
