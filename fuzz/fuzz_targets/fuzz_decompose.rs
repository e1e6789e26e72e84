#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any non-empty digit string splits without panicking.
    let digits: String = data.iter().map(|b| char::from(b'0' + b % 10)).collect();
    if !digits.is_empty() {
        let card = cardnum::decompose(&digits);
        assert_eq!(card.number, digits);
        assert_eq!(card.check_digit, &digits[digits.len() - 1..]);
        assert!(digits.starts_with(&card.issuer_identification_number));
        assert_eq!(cardnum::decompose(&digits), card);
    }
});
