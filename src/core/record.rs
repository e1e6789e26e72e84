use serde::{Deserialize, Serialize};

use super::error::InvalidCardNumber;
use super::luhn::{is_digits, verify};

/// Length of the issuer identification number, MII included.
pub const IIN_LEN: usize = 6;

/// A number that passed the Luhn check, split into its positional fields.
///
/// Field boundaries are fixed by position, not looked up per card network:
///
/// ```text
/// 4 50349 545553227 1
/// │ └──┬┘ └───┬───┘ └─ check digit
/// │    │      └─────── personal account number
/// └────┴────────────── issuer identification number (MII first)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRecord {
    /// The full digit string.
    pub number: String,
    /// First digit.
    pub major_industry_identifier: String,
    /// First six digits.
    pub issuer_identification_number: String,
    /// Digits between the IIN and the check digit.
    pub personal_account_number: String,
    /// Last digit.
    pub check_digit: String,
}

/// Outcome of validating raw input: either a decomposed number or the raw
/// input kept as a placeholder so callers can still serialize a shaped record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRecord {
    Valid(NumberRecord),
    Invalid { number: String },
}

/// Wire shape of a [`CardRecord`].
///
/// Structural fields are `None` for an invalid placeholder; `number` is only
/// present when explicitly requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub major_industry_identifier: Option<String>,
    pub issuer_identification_number: Option<String>,
    pub personal_account_number: Option<String>,
    pub check_digit: Option<String>,
    pub is_valid: bool,
}

/// Split a digit string into its positional fields.
///
/// The caller guarantees `digits` is a non-empty ASCII digit string. Numbers
/// shorter than seven digits get clamped fields: the IIN is whatever is
/// available up to six digits and the account number may be empty.
pub fn decompose(digits: &str) -> NumberRecord {
    debug_assert!(is_digits(digits), "decompose called with {digits:?}");
    let len = digits.len();
    let last = len.saturating_sub(1);
    let iin_end = IIN_LEN.min(len);
    let pan_start = IIN_LEN.min(last);

    NumberRecord {
        number: digits.to_string(),
        major_industry_identifier: digits[..1usize.min(len)].to_string(),
        issuer_identification_number: digits[..iin_end].to_string(),
        personal_account_number: digits[pan_start..last].to_string(),
        check_digit: digits[last..].to_string(),
    }
}

/// Validate `number` with the Luhn check and decompose it.
///
/// Only the characters and the checksum are checked. A checksum-valid string
/// of any length is accepted; generation is what pins the length.
///
/// ```
/// use cardnum::from_number;
///
/// let rec = from_number("4503495455532271").unwrap();
/// assert_eq!(rec.issuer_identification_number, "450349");
/// assert_eq!(rec.personal_account_number, "545553227");
/// assert!(from_number("1234567890123456").is_err());
/// ```
pub fn from_number(number: &str) -> Result<NumberRecord, InvalidCardNumber> {
    if !is_digits(number) || !verify(number) {
        return Err(InvalidCardNumber::new(number));
    }
    Ok(decompose(number))
}

impl NumberRecord {
    /// Shape this record for output, with or without the full number.
    pub fn serialized(&self, with_number: bool) -> RecordView {
        RecordView {
            number: with_number.then(|| self.number.clone()),
            major_industry_identifier: Some(self.major_industry_identifier.clone()),
            issuer_identification_number: Some(self.issuer_identification_number.clone()),
            personal_account_number: Some(self.personal_account_number.clone()),
            check_digit: Some(self.check_digit.clone()),
            is_valid: true,
        }
    }
}

impl CardRecord {
    /// Validate raw input, keeping a placeholder on failure.
    pub fn parse(number: &str) -> Self {
        match from_number(number) {
            Ok(record) => Self::Valid(record),
            Err(err) => Self::with_invalid_number(err.number),
        }
    }

    /// Placeholder for input that failed validation.
    pub fn with_invalid_number(number: impl Into<String>) -> Self {
        Self::Invalid {
            number: number.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The raw input or validated number.
    pub fn number(&self) -> &str {
        match self {
            Self::Valid(record) => &record.number,
            Self::Invalid { number } => number,
        }
    }

    pub fn as_valid(&self) -> Option<&NumberRecord> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Invalid { .. } => None,
        }
    }

    /// Shape this record for output, with or without the full number.
    pub fn serialized(&self, with_number: bool) -> RecordView {
        match self {
            Self::Valid(record) => record.serialized(with_number),
            Self::Invalid { number } => RecordView {
                number: with_number.then(|| number.clone()),
                major_industry_identifier: None,
                issuer_identification_number: None,
                personal_account_number: None,
                check_digit: None,
                is_valid: false,
            },
        }
    }
}

impl From<NumberRecord> for CardRecord {
    fn from(record: NumberRecord) -> Self {
        Self::Valid(record)
    }
}
