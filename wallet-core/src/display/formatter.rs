use std::str::FromStr;

use accounting::Accounting;
use anyhow::Context;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::{currency::BaseCurrency, interface::DisplayError};
use crate::error::AsClientError;

/// Extra digit rounded half-down before truncating, so 0.9999 shows as 1.00
/// rather than 0.99.
const ROUNDING_TOLERANCE: u32 = 1;

const FEE_DECIMALS: u32 = 3;
const NETWORK_FEE_DECIMALS: u32 = 3;
const NETWORK_FEE_PRECISE_DECIMALS: u32 = 6;
const EXCHANGE_RATE_DECIMALS: u32 = 4;
const CENT_DECIMALS: u32 = 2;

/// How an amount's digits are written.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
pub enum FormatMode {
    /// Currency display decimals, rounded down.
    #[default]
    Default,

    /// No decimals for whole amounts, cents otherwise.
    CentAware,

    Fee,

    NetworkFee,

    NetworkFeePrecise,

    ExchangeRate,
}

impl FormatMode {
    pub fn parse(s: &str) -> Result<Self, DisplayError> {
        let mode = FormatMode::from_str(s)
            .with_context(|| format!("unknown format mode {:?}", s))
            .as_client_err()?;

        Ok(mode)
    }

    pub fn format(&self, value: Decimal, currency: BaseCurrency) -> String {
        format_value(value, *self, currency)
    }
}

/// Write a non-negative amount for display. Sign handling belongs to the caller,
/// so a negative value is formatted by its magnitude.
pub fn format_value(value: Decimal, mode: FormatMode, currency: BaseCurrency) -> String {
    let value = value.abs();

    match mode {
        FormatMode::Default => money_display_value(value, currency),
        FormatMode::CentAware => cent_aware_money_display(value),
        FormatMode::Fee => fee_display_value(value),
        FormatMode::NetworkFee => network_fee_display_value(value, false),
        FormatMode::NetworkFeePrecise => network_fee_display_value(value, true),
        FormatMode::ExchangeRate => exchange_rate_display_value(value),
    }
}

fn money_display_value(value: Decimal, currency: BaseCurrency) -> String {
    let decimals = currency.display_decimals();
    let rounded = value
        .round_dp_with_strategy(
            decimals + ROUNDING_TOLERANCE,
            RoundingStrategy::MidpointTowardZero,
        )
        .round_dp_with_strategy(decimals, RoundingStrategy::ToZero);

    group_thousands(rounded, decimals)
}

fn cent_aware_money_display(value: Decimal) -> String {
    if value.fract().is_zero() {
        return group_thousands(value.trunc(), 0);
    }

    let rounded = value.round_dp_with_strategy(CENT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    group_thousands(rounded, CENT_DECIMALS)
}

fn fee_display_value(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(FEE_DECIMALS, RoundingStrategy::AwayFromZero);
    group_thousands(rounded, FEE_DECIMALS)
}

fn network_fee_display_value(value: Decimal, precise: bool) -> String {
    let decimals = if precise {
        NETWORK_FEE_PRECISE_DECIMALS
    } else {
        NETWORK_FEE_DECIMALS
    };

    // smallest amount that still shows a digit
    let smallest = Decimal::new(1, decimals);
    if value > Decimal::ZERO && value < smallest {
        return format!("<{}", smallest);
    }

    let rounded = value
        .round_dp_with_strategy(decimals, RoundingStrategy::AwayFromZero)
        .normalize();
    group_thousands(rounded, rounded.scale())
}

fn exchange_rate_display_value(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(EXCHANGE_RATE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    group_thousands(rounded, rounded.scale())
}

/// Comma separated thousands, dot fraction, exactly `decimals` fraction digits.
/// The value must already be rounded to at most `decimals` places.
fn group_thousands(value: Decimal, decimals: u32) -> String {
    let mut value = value;
    value.rescale(decimals);

    // rescale stops at 28 significant digits, the rest is padded as text
    let scale = value.scale();
    let mut ac = Accounting::new_from_seperator("", scale.try_into().unwrap_or_default(), ",", ".");
    ac.set_format("{v}");

    let mut ret = ac.format_money(value);
    if scale < decimals {
        if scale == 0 {
            ret.push('.');
        }
        ret.extend(std::iter::repeat('0').take((decimals - scale) as usize));
    }
    ret
}
