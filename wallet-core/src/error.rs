use thiserror::Error;

/// Wrapper around anyhow::Error
pub trait BaseError: Sized + std::error::Error + Send + Sync + 'static {
    fn new(err: impl Into<anyhow::Error>) -> Self;

    fn from_msg<S: AsRef<str>>(message: S) -> Self {
        let err = anyhow::anyhow!("{}", message.as_ref());
        Self::new(err)
    }

    fn cause(&self) -> String {
        self.source()
            .map(|err| err.to_string())
            .unwrap_or("Error undefined".to_string())
    }

    fn detail(&self) -> String {
        let error = self.to_string();
        let cause = BaseError::cause(self);
        format!("{} \nCaused by: {}", error, cause)
    }
}

/// Caller handed in something unusable: unknown currency code, malformed amount, bad rate.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ClientError(#[from] anyhow::Error);

impl BaseError for ClientError {
    fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }
}

impl ClientError {
    pub(crate) fn inner(&self) -> &anyhow::Error {
        &self.0
    }
}

/// Computation failed on valid input, e.g. decimal overflow.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InternalError(#[from] anyhow::Error);

impl BaseError for InternalError {
    fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }
}

impl InternalError {
    pub(crate) fn inner(&self) -> &anyhow::Error {
        &self.0
    }
}

pub trait AsClientError<T> {
    fn as_client_err(self) -> Result<T, ClientError>;
}

pub trait AsInternalError<T> {
    fn as_internal_err(self) -> Result<T, InternalError>;
}

impl<T, E> AsClientError<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn as_client_err(self) -> Result<T, ClientError> {
        self.map_err(|e| ClientError(e.into()))
    }
}

impl<T, E> AsInternalError<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn as_internal_err(self) -> Result<T, InternalError> {
        self.map_err(|e| InternalError(e.into()))
    }
}

#[cfg(test)]
mod error_tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn test_client_error_detail() {
        let ret: Result<u32, ClientError> = "abc"
            .parse::<u32>()
            .context("parsing amount")
            .as_client_err();
        let err = ret.unwrap_err();

        assert_eq!(err.to_string(), "parsing amount");
        assert!(err.detail().starts_with("parsing amount"));
    }

    #[test]
    fn test_from_msg() {
        let err = InternalError::from_msg("overflow");
        assert_eq!(err.to_string(), "overflow");
        assert!(err.detail().contains("Caused by:"));
    }
}
