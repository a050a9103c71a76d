use anyhow::anyhow;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{
    amount::MoneyAmount,
    currency::{BaseCurrency, CurrencyCode},
    interface::{DisplayError, DisplayResult, ERROR_PREFIX},
    rate::{ExchangeRate, RateSnapshot},
};
use crate::error::{BaseError, InternalError};

/// Whether an amount is shown in the user's local currency.
///
/// An explicit choice wins. Without one every currency is shown locally
/// except Gold, which stays in its own unit.
pub fn should_show_local_amount(amount: &MoneyAmount, show_local_amount: Option<bool>) -> bool {
    show_local_amount.unwrap_or(!amount.currency_code.is_gold())
}

/// Pick the amount to display.
///
/// Returns `None` when a local amount is wanted but cannot be computed: a
/// required rate is missing, the currency has no conversion path, or the
/// arithmetic overflows.
pub fn resolve(amount: &MoneyAmount, want_local: bool, rates: &RateSnapshot) -> Option<MoneyAmount> {
    if let Some(local_amount) = &amount.local_amount {
        return Some(local_amount.as_ref().clone());
    }

    if !want_local {
        return Some(amount.clone());
    }

    match local_amount(amount, rates) {
        Ok(Some(value)) => Some(MoneyAmount::new_amount(rates.local_currency, value)),
        Ok(None) => {
            debug!(
                amount = %amount,
                local_currency = %rates.local_currency,
                "local amount unavailable"
            );
            None
        }
        Err(err) => {
            warn!(amount = %amount, error = %err.detail(), "local amount conversion failed");
            None
        }
    }
}

fn local_amount(amount: &MoneyAmount, rates: &RateSnapshot) -> DisplayResult<Option<Decimal>> {
    let dollar_value = match amount.currency_code {
        CurrencyCode::Base(BaseCurrency::Gold) => match rates.gold_to_dollar {
            Some(rate) => gold_to_dollar_amount(amount.value, rate)?,
            None => return Ok(None),
        },
        CurrencyCode::Base(BaseCurrency::Dollar) => amount.value,
        // no conversion path from an already local amount
        CurrencyCode::Local(_) => return Ok(None),
    };

    convert_dollars_to_local_amount(dollar_value, rates.dollar_to_local)
}

pub fn gold_to_dollar_amount(value: Decimal, gold_to_dollar: ExchangeRate) -> DisplayResult<Decimal> {
    apply_rate(value, gold_to_dollar, "gold to dollar")
}

/// `None` when no Dollar to local rate is known.
pub fn convert_dollars_to_local_amount(
    value: Decimal,
    dollar_to_local: Option<ExchangeRate>,
) -> DisplayResult<Option<Decimal>> {
    match dollar_to_local {
        Some(rate) => apply_rate(value, rate, "dollar to local").map(Some),
        None => Ok(None),
    }
}

fn apply_rate(value: Decimal, rate: ExchangeRate, step: &str) -> DisplayResult<Decimal> {
    value.checked_mul(rate.value()).ok_or_else(|| {
        DisplayError::InternalError(InternalError::new(anyhow!(
            "{} {} conversion overflowed: {} * {}",
            ERROR_PREFIX,
            step,
            value,
            rate.value()
        )))
    })
}
