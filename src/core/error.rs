use thiserror::Error;

/// The input is not a card number: it contains non-digit characters or
/// fails the Luhn checksum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card number '{number}'")]
pub struct InvalidCardNumber {
    /// The rejected input, verbatim.
    pub number: String,
}

impl InvalidCardNumber {
    pub(crate) fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

/// The issuer prefix handed to the generator is empty, longer than
/// [`MAX_PREFIX_LEN`](super::MAX_PREFIX_LEN) digits, or not numeric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid issuer prefix '{prefix}': expected 1-2 digits")]
pub struct InvalidPrefix {
    /// The rejected prefix, verbatim.
    pub prefix: String,
}

impl InvalidPrefix {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

/// Any recoverable error produced by the number engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CardError {
    /// Validation of a full number failed.
    #[error(transparent)]
    InvalidCardNumber(#[from] InvalidCardNumber),

    /// Generation was asked to start from a bad prefix.
    #[error(transparent)]
    InvalidPrefix(#[from] InvalidPrefix),
}
