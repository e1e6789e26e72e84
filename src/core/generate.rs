use super::error::InvalidPrefix;
use super::luhn::{compute_check_digit, is_digits};
use super::record::{NumberRecord, from_number};

/// Default total length of a generated number, check digit included.
pub const CARD_LENGTH: usize = 16;

/// Longest issuer prefix the generator accepts.
pub const MAX_PREFIX_LEN: usize = 2;

/// Source of decimal digits for the random middle section of a number.
pub trait DigitSource {
    /// Next digit, in `0..=9`.
    fn next_digit(&mut self) -> u8;
}

/// Uniform digits from the thread-local RNG. Unseeded; every call is fresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDigits;

impl DigitSource for RandomDigits {
    fn next_digit(&mut self) -> u8 {
        rand::random_range(0..=9)
    }
}

/// Repeats a fixed digit sequence. Useful for reproducible output.
#[derive(Debug, Clone)]
pub struct CycleDigits {
    digits: Vec<u8>,
    pos: usize,
}

impl CycleDigits {
    /// # Panics
    ///
    /// Panics if `digits` is empty or holds a value above 9.
    pub fn new(digits: impl Into<Vec<u8>>) -> Self {
        let digits = digits.into();
        assert!(!digits.is_empty(), "digit cycle must not be empty");
        assert!(
            digits.iter().all(|&d| d <= 9),
            "digit cycle holds non-decimal value: {digits:?}"
        );
        Self { digits, pos: 0 }
    }
}

impl DigitSource for CycleDigits {
    fn next_digit(&mut self) -> u8 {
        let d = self.digits[self.pos];
        self.pos = (self.pos + 1) % self.digits.len();
        d
    }
}

impl<F> DigitSource for F
where
    F: FnMut() -> u8,
{
    fn next_digit(&mut self) -> u8 {
        (self)() % 10
    }
}

/// Builds Luhn-valid numbers of a fixed length from a short issuer prefix.
///
/// ```
/// use cardnum::{CycleDigits, NumberGenerator, verify};
///
/// let mut generator = NumberGenerator::with_source(CycleDigits::new([0]));
/// let rec = generator.generate("45").unwrap();
/// assert_eq!(rec.number, "4500000000000007");
/// assert!(verify(&rec.number));
/// ```
#[derive(Debug, Clone)]
pub struct NumberGenerator<S = RandomDigits> {
    length: usize,
    source: S,
}

impl NumberGenerator<RandomDigits> {
    /// Generator for [`CARD_LENGTH`]-digit numbers with random digits.
    pub fn new() -> Self {
        Self::with_source(RandomDigits)
    }
}

impl Default for NumberGenerator<RandomDigits> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DigitSource> NumberGenerator<S> {
    /// Generator for [`CARD_LENGTH`]-digit numbers drawing from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            length: CARD_LENGTH,
            source,
        }
    }

    /// Set the total length of generated numbers.
    ///
    /// # Panics
    ///
    /// Panics if `length` leaves no room for the longest prefix plus the
    /// check digit. The length is configuration, never user input.
    pub fn length(mut self, length: usize) -> Self {
        assert!(
            length > MAX_PREFIX_LEN,
            "card length {length} cannot hold a {MAX_PREFIX_LEN}-digit prefix and a check digit"
        );
        self.length = length;
        self
    }

    /// The configured total length.
    pub fn card_length(&self) -> usize {
        self.length
    }

    /// Generate a number starting with `prefix`.
    ///
    /// The prefix must be one or two digits. The digits between prefix and
    /// check digit come from the generator's source.
    ///
    /// # Panics
    ///
    /// Panics if the assembled candidate fails its own checksum, which would
    /// mean the check digit computation is broken.
    pub fn generate(&mut self, prefix: &str) -> Result<NumberRecord, InvalidPrefix> {
        if prefix.len() > MAX_PREFIX_LEN || !is_digits(prefix) {
            return Err(InvalidPrefix::new(prefix));
        }

        let middle_len = self.length - prefix.len() - 1;
        let mut body = String::with_capacity(self.length);
        body.push_str(prefix);
        for _ in 0..middle_len {
            body.push(char::from(b'0' + self.source.next_digit() % 10));
        }
        body.push(compute_check_digit(&body));

        match from_number(&body) {
            Ok(record) => Ok(record),
            Err(err) => panic!("generated number {} failed its own checksum", err.number),
        }
    }
}

/// Generate a random [`CARD_LENGTH`]-digit number starting with `prefix`.
///
/// ```
/// use cardnum::{generate_from_prefix, verify};
///
/// let rec = generate_from_prefix("45").unwrap();
/// assert!(rec.number.starts_with("45"));
/// assert_eq!(rec.number.len(), 16);
/// assert!(verify(&rec.number));
///
/// assert!(generate_from_prefix("123").is_err());
/// ```
pub fn generate_from_prefix(prefix: &str) -> Result<NumberRecord, InvalidPrefix> {
    NumberGenerator::new().generate(prefix)
}
