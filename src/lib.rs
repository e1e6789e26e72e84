//! # cardnum
//!
//! Validation, decomposition and generation of payment-card-like numbers
//! using the Luhn checksum.
//!
//! A number is split by position into its conventional fields: the major
//! industry identifier (first digit), the issuer identification number (first
//! six digits), the personal account number, and the trailing check digit.
//! No card-network rules are applied.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardnum::*;
//!
//! let card = from_number("4503495455532271").unwrap();
//! assert_eq!(card.major_industry_identifier, "4");
//! assert_eq!(card.issuer_identification_number, "450349");
//! assert_eq!(card.personal_account_number, "545553227");
//! assert_eq!(card.check_digit, "1");
//!
//! assert!(from_number("1234567890123456").is_err());
//!
//! let generated = generate_from_prefix("45").unwrap();
//! assert_eq!(from_number(&generated.number).unwrap(), generated);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Luhn checksum, decomposition, generation |
//! | `server` | axum HTTP service and the `cardnum-server` binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "server")]
pub mod server;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
