pub mod currency;
pub use currency::{BaseCurrency, CurrencyCode, LocalCurrencyCode};

pub mod amount;
pub use amount::MoneyAmount;

pub mod interface;
pub use interface::{CurrencyNames, DefaultCurrencyNames, DisplayError, DisplayResult};

pub mod rate;
pub use rate::{CurrencyInfo, ExchangeRate, RateSnapshot};

pub mod resolver;
pub use resolver::{resolve, should_show_local_amount};

pub mod formatter;
pub use formatter::{format_value, FormatMode};

pub mod presentation;
pub use presentation::{
    assemble, AssembleContext, CurrencyDisplay, DisplayFlags, DisplayType, Segment,
};

pub mod service;
pub use service::{render, DisplayProps};

#[cfg(test)]
mod currency_test;
#[cfg(test)]
mod formatter_test;
