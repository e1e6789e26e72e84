use cardnum::*;

fn main() {
    println!("=== Validation ===\n");

    let inputs = [
        "4503495455532271",
        "4111111111111111",
        "1234567890123456", // bad checksum
        "4503 4954 5553 2271",
        "79927398713", // valid Luhn, short
    ];

    for input in &inputs {
        match from_number(input) {
            Ok(card) => println!(
                "  {input} => valid (mii={}, iin={}, pan={}, check={})",
                card.major_industry_identifier,
                card.issuer_identification_number,
                card.personal_account_number,
                card.check_digit
            ),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    println!("\n=== Generation ===\n");

    for prefix in ["4", "45", "37", "", "123", "a"] {
        match generate_from_prefix(prefix) {
            Ok(card) => println!("  {prefix:>3} => {}", card.number),
            Err(e) => println!("  {prefix:>3} => INVALID: {e}"),
        }
    }

    println!("\n=== Reproducible generation ===\n");

    let mut generator = NumberGenerator::with_source(CycleDigits::new([0]));
    let card = generator.generate("45").unwrap();
    println!("  45 + zeros => {}", card.number);
}
