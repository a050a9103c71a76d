use anyhow::Context;
use std::{fmt::Display, str::FromStr};

use iso_currency::Currency as CurrencyLib;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::interface::DisplayError;
use crate::error::AsClientError;

/// Currencies held by the wallet itself. Dollar is also the intermediate unit
/// every Gold amount goes through before reaching a local currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum BaseCurrency {
    #[serde(rename = "cUSD")]
    Dollar,

    #[serde(rename = "cGLD")]
    Gold,
}

impl BaseCurrency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Dollar => "cUSD",
            Self::Gold => "cGLD",
        }
    }

    /// Gold has no symbol of its own.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Dollar => Some("$"),
            Self::Gold => None,
        }
    }

    pub fn display_decimals(&self) -> u32 {
        match self {
            Self::Dollar => 2,
            Self::Gold => 3,
        }
    }

    pub fn to_comma_separated_list_str() -> String {
        BaseCurrency::iter()
            .map(|c| c.code())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for BaseCurrency {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let quoted_curr = format!("\"{}\"", s);
        let curr = serde_json::from_str(&quoted_curr)
            .with_context(|| {
                format!(
                    "base currency parsing from str invalid, supported currencies: {}",
                    BaseCurrency::to_comma_separated_list_str()
                )
            })
            .as_client_err()?;

        Ok(curr)
    }
}

impl Display for BaseCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Currencies a user can pick for local display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum LocalCurrencyCode {
    // americas
    USD,
    CAD,
    MXN,
    CLP,
    BRL,

    // europe
    EUR,

    // asia
    PHP,

    // africa
    LRD,
    KES,
    UGX,
    GHS,
    NGN,
    CVE,
    TZS,
    ZAR,
}

impl LocalCurrencyCode {
    pub fn code(&self) -> &'static str {
        self.iso().code()
    }

    pub fn iso(&self) -> CurrencyLib {
        match self {
            Self::USD => CurrencyLib::USD,
            Self::CAD => CurrencyLib::CAD,
            Self::MXN => CurrencyLib::MXN,
            Self::CLP => CurrencyLib::CLP,
            Self::BRL => CurrencyLib::BRL,
            Self::EUR => CurrencyLib::EUR,
            Self::PHP => CurrencyLib::PHP,
            Self::LRD => CurrencyLib::LRD,
            Self::KES => CurrencyLib::KES,
            Self::UGX => CurrencyLib::UGX,
            Self::GHS => CurrencyLib::GHS,
            Self::NGN => CurrencyLib::NGN,
            Self::CVE => CurrencyLib::CVE,
            Self::TZS => CurrencyLib::TZS,
            Self::ZAR => CurrencyLib::ZAR,
        }
    }

    /// Symbol shown in front of a local amount. Several dollar-like currencies share `$`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::CAD => "$",
            Self::MXN => "$",
            Self::CLP => "$",
            Self::BRL => "R$",
            Self::EUR => "€",
            Self::PHP => "₱",
            Self::LRD => "L$",
            Self::KES => "KSh",
            Self::UGX => "USh",
            Self::GHS => "GH₵",
            Self::NGN => "₦",
            Self::CVE => "$",
            Self::TZS => "TSh",
            Self::ZAR => "R",
        }
    }

    pub fn to_comma_separated_list_str() -> String {
        LocalCurrencyCode::iter()
            .map(|c| c.code())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for LocalCurrencyCode {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let quoted_curr = format!("\"{}\"", s);
        let curr = serde_json::from_str(&quoted_curr)
            .with_context(|| {
                format!(
                    "local currency parsing from str invalid, supported currencies: {}",
                    LocalCurrencyCode::to_comma_separated_list_str()
                )
            })
            .as_client_err()?;

        Ok(curr)
    }
}

impl Default for LocalCurrencyCode {
    fn default() -> Self {
        Self::USD
    }
}

impl Display for LocalCurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Currency tag carried by an amount: one of the wallet's own currencies, or a
/// local currency an amount was converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurrencyCode {
    Base(BaseCurrency),
    Local(LocalCurrencyCode),
}

impl CurrencyCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Base(c) => c.code(),
            Self::Local(c) => c.code(),
        }
    }

    /// Base currency used to pick decimal precision. Anything that is not Gold
    /// formats like Dollar, local currencies included.
    pub fn display_currency(&self) -> BaseCurrency {
        match self {
            Self::Base(BaseCurrency::Gold) => BaseCurrency::Gold,
            _ => BaseCurrency::Dollar,
        }
    }

    pub fn is_gold(&self) -> bool {
        matches!(self, Self::Base(BaseCurrency::Gold))
    }

    /// Symbol from the table the code belongs to: local codes use the local
    /// table, base codes the base one. Gold has none.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Base(c) => c.symbol(),
            Self::Local(c) => Some(c.symbol()),
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(base) = s.parse::<BaseCurrency>() {
            return Ok(Self::Base(base));
        }

        let local = s.parse::<LocalCurrencyCode>().map_err(|_| {
            DisplayError::client_error(&format!(
                "unknown currency code {:?}, supported codes: {},{}",
                s,
                BaseCurrency::to_comma_separated_list_str(),
                LocalCurrencyCode::to_comma_separated_list_str()
            ))
        })?;

        Ok(Self::Local(local))
    }
}

impl From<BaseCurrency> for CurrencyCode {
    fn from(value: BaseCurrency) -> Self {
        Self::Base(value)
    }
}

impl From<LocalCurrencyCode> for CurrencyCode {
    fn from(value: LocalCurrencyCode) -> Self {
        Self::Local(value)
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
