//! Luhn (mod 10) checksum.

/// Returns true if `s` is non-empty and made only of ASCII digits.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Weighted Luhn sum, walking from the rightmost digit.
///
/// Every second digit counting from the right (the rightmost excluded) is
/// doubled, and 9 is subtracted from any doubled value above 9.
fn luhn_sum<I>(digits: I) -> u32
where
    I: DoubleEndedIterator<Item = u8>,
{
    digits
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum()
}

/// Verify a digit string against the Luhn checksum.
///
/// The trailing digit is treated as the check digit. Empty input or any
/// character outside `0`-`9` yields `false`.
///
/// ```
/// use cardnum::verify;
///
/// assert!(verify("4503495455532271"));
/// assert!(!verify("1234567890123456"));
/// assert!(!verify("4503 4954 5553 2271"));
/// ```
pub fn verify(digits: &str) -> bool {
    is_digits(digits) && luhn_sum(digits.bytes()) % 10 == 0
}

/// Compute the check digit that makes `prefix` + digit pass [`verify`].
///
/// # Panics
///
/// Panics if `prefix` is empty or contains anything but ASCII digits.
/// Callers validate their input first.
///
/// ```
/// use cardnum::compute_check_digit;
///
/// assert_eq!(compute_check_digit("450349545553227"), '1');
/// ```
pub fn compute_check_digit(prefix: &str) -> char {
    assert!(
        is_digits(prefix),
        "check digit requested for non-numeric prefix {prefix:?}"
    );
    let sum = luhn_sum(prefix.bytes().chain(std::iter::once(b'0')));
    let d = (10 - sum % 10) % 10;
    char::from(b'0' + d as u8)
}
