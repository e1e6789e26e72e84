//! Luhn validation, structural decomposition and generation of card numbers.
//!
//! This module is pure: no I/O, no logging, no shared state. The only side
//! effect is the digit source used by [`NumberGenerator`].

mod error;
mod generate;
pub mod luhn;
mod record;

pub use error::*;
pub use generate::*;
pub use luhn::{compute_check_digit, is_digits, verify};
pub use record::*;
