use std::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    currency::LocalCurrencyCode,
    interface::{DisplayError, DisplayResult},
};
use crate::error::AsClientError;

/// Multiplier turning one unit of a currency into another. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    pub fn new(rate: Decimal) -> DisplayResult<Self> {
        if rate <= Decimal::ZERO {
            return Err(DisplayError::client_error(&format!(
                "exchange rate must be greater than 0, got {}",
                rate
            )));
        }

        Ok(Self(rate))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for ExchangeRate {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rate = Decimal::from_str(s.trim())
            .with_context(|| format!("exchange rate convert {:?} to Decimal", s))
            .as_client_err()?;

        Self::new(rate)
    }
}

impl TryFrom<Decimal> for ExchangeRate {
    type Error = DisplayError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExchangeRate> for Decimal {
    fn from(value: ExchangeRate) -> Self {
        value.0
    }
}

/// Rates current at render time. Either rate may be missing while the feed
/// has not delivered it yet; conversions needing it are then unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub gold_to_dollar: Option<ExchangeRate>,
    pub dollar_to_local: Option<ExchangeRate>,
    pub local_currency: LocalCurrencyCode,
}

impl RateSnapshot {
    pub fn new(
        gold_to_dollar: Option<ExchangeRate>,
        dollar_to_local: Option<ExchangeRate>,
        local_currency: LocalCurrencyCode,
    ) -> Self {
        Self {
            gold_to_dollar,
            dollar_to_local,
            local_currency,
        }
    }

    /// Swap in a pinned local currency and rate, keeping the Gold rate.
    pub fn with_currency_info(self, info: &CurrencyInfo) -> Self {
        Self {
            gold_to_dollar: self.gold_to_dollar,
            dollar_to_local: info.local_exchange_rate,
            local_currency: info.local_currency,
        }
    }
}

/// Local currency and rate fixed by a screen (e.g. a confirmation showing the
/// rate the user agreed to) instead of the live ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub local_currency: LocalCurrencyCode,
    pub local_exchange_rate: Option<ExchangeRate>,
}
