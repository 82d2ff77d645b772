use thiserror::Error;

/// Errors returned by the selection routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input or the requested rank violates the call contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::invalid_argument("empty input");
        assert_eq!(err.to_string(), "invalid argument: empty input");
    }
}
