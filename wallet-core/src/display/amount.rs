use std::{fmt::Display, str::FromStr};

use anyhow::Context;
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    currency::CurrencyCode,
    interface::{DisplayError, DisplayResult},
};
use crate::error::AsClientError;

pub(crate) const ERROR_MONEY_FORMAT: &str = "The amount must be written as <CODE> <AMOUNT>, e.g. cUSD 1,000.50 or PHP -20. Amount may be separated by comma for thousands, and by dot for fraction.";

lazy_static! {
    /// Currency code (ISO 4217 or a wallet code such as cUSD) followed by an amount with
    /// optional sign, comma separated thousands and dot separated fraction.
    /// e.g.
    /// cUSD 1000
    /// cGLD 1,000.125
    /// PHP -5,000.25
    pub(crate) static ref MONEY_FORMAT_REGEX: regex::Regex =
        regex::Regex::new(r"^([A-Za-z]{3,4})\s+(-?(?:\d{1,3}(?:,\d{3})*|\d+)(?:\.\d+)?)$").expect("failed compiling money format regex");
}

/// An amount tagged with its currency, as handed to the display layer.
///
/// `local_amount` is a conversion the caller already has (e.g. recorded with a
/// transaction); when present it is shown instead of recomputing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    pub value: Decimal,

    #[serde(rename = "currencyCode")]
    pub currency_code: CurrencyCode,

    #[serde(rename = "localAmount", default, skip_serializing_if = "Option::is_none")]
    pub local_amount: Option<Box<MoneyAmount>>,
}

impl MoneyAmount {
    pub fn new(value: &str, currency_code: &str) -> DisplayResult<Self> {
        let currency_code = currency_code.parse::<CurrencyCode>()?;
        let value = Decimal::from_str(value.trim())
            .with_context(|| format!("MoneyAmount convert {:?} to Decimal", value))
            .as_client_err()?;

        Ok(Self::new_amount(currency_code, value))
    }

    pub fn new_amount(currency_code: impl Into<CurrencyCode>, value: Decimal) -> Self {
        Self {
            value,
            currency_code: currency_code.into(),
            local_amount: None,
        }
    }

    /// Attach an already converted local amount.
    pub fn with_local_amount(mut self, local_amount: MoneyAmount) -> Self {
        self.local_amount = Some(Box::new(local_amount));
        self
    }

    pub fn code(&self) -> &'static str {
        self.currency_code.code()
    }

    fn parse_str(input: &str) -> DisplayResult<Self> {
        // 1. parse with regex
        let captures = MONEY_FORMAT_REGEX
            .captures(input.trim())
            .ok_or_else(|| DisplayError::client_error(ERROR_MONEY_FORMAT))?;

        // 2. take money parts: currency and amount
        let (code, amount) = match (captures.get(1), captures.get(2)) {
            (Some(code), Some(amount)) => (code.as_str(), amount.as_str()),
            _ => return Err(DisplayError::client_error(ERROR_MONEY_FORMAT)),
        };

        // 3. remove thousands separator
        let amount: String = amount.chars().filter(|&c| c != ',').collect();

        Self::new(&amount, code)
    }
}

impl FromStr for MoneyAmount {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl Display for MoneyAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency_code, self.value)
    }
}
