//! metas-money
//!
//! Exact-precision currency arithmetic:
//! - Integer-cent fixed-point money type (`Cents`)
//! - Drift-free summation of decimal amounts
//! - pt-BR localized parsing/formatting (`R$ 1.234,56`)
//! - Range validation for user-entered amounts
//! - Pure deterministic logic (no IO, no time, no locale tables)

mod cents;
mod locale;

pub use cents::{sum, Cents, CENT_SCALE};
pub use locale::{
    format_amount, format_amount_compact, is_valid_amount, parse_amount, CURRENCY_PREFIX,
    MAX_AMOUNT,
};
