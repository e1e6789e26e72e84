#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Accepted numbers must reparse to the same record.
        if let Ok(card) = cardnum::from_number(s) {
            assert_eq!(cardnum::from_number(&card.number), Ok(card));
        }
        let _ = cardnum::CardRecord::parse(s).serialized(true);
    }
});
