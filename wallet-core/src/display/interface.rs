use anyhow::anyhow;
use thiserror::Error;

use super::currency::BaseCurrency;
use crate::error::{BaseError, ClientError, InternalError};

pub(super) const ERROR_PREFIX: &str = "[DISPLAY]";

pub type DisplayResult<T> = Result<T, DisplayError>;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("{ERROR_PREFIX} display client error: {0}")]
    ClientError(#[from] ClientError),

    #[error("{ERROR_PREFIX} display internal error: {0}")]
    InternalError(#[from] InternalError),
}

impl DisplayError {
    pub fn client_error(err_msg: &str) -> Self {
        DisplayError::ClientError(ClientError::new(anyhow!(err_msg.to_owned())))
    }

    pub fn internal_error(err_msg: &str) -> Self {
        DisplayError::InternalError(InternalError::new(anyhow!(err_msg.to_owned())))
    }

    pub fn cause(&self) -> String {
        match self {
            DisplayError::ClientError(err) => match err.inner().source() {
                Some(err) => format!("client error caused by: {}", err),
                None => "client error caused by: null".to_string(),
            },
            DisplayError::InternalError(err) => match err.inner().source() {
                Some(err) => format!("internal error caused by: {}", err),
                None => "internal error caused by: null".to_string(),
            },
        }
    }

    pub fn detail(&self) -> String {
        let error = self.to_string();
        let cause = self.cause();
        format!("{} \n  Caused by: {}", error, cause)
    }
}

/// Localised full name of a currency, e.g. "Celo Dollars".
///
/// Translation storage lives with the host app; this is the seam it plugs into.
/// Returning `None` leaves the name segment out.
pub trait CurrencyNames {
    fn full_name(&self, currency: BaseCurrency) -> Option<String>;
}

/// English names for the two base currencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCurrencyNames;

impl CurrencyNames for DefaultCurrencyNames {
    fn full_name(&self, currency: BaseCurrency) -> Option<String> {
        match currency {
            BaseCurrency::Dollar => Some("Celo Dollars".to_string()),
            BaseCurrency::Gold => Some("Celo Gold".to_string()),
        }
    }
}
