//! Fixed-point money type
//!
//! # Motivation
//!
//! All money amounts in this system use an integer-cent representation stored
//! as `i64`.  Using raw `i64` for money is error-prone: it allows accidental
//! arithmetic with unrelated integers (ratios, counts, ids) without any
//! compile-time signal.
//!
//! `Cents` wraps the raw `i64` so the type system prevents:
//! - Implicit construction from raw `i64` (no `From<i64>` impl).
//! - Mixing `Cents` with unrelated `i64` values in arithmetic.
//!
//! # Scale
//!
//! 1 real (R$) = 100 Cents.  All monetary values (reward amounts, earned and
//! blocked totals) use this scale.  Non-monetary quantities (item counts,
//! completion ratios) remain plain `i64`/`f64` and are never implicitly
//! convertible.
//!
//! # Decimal boundary
//!
//! Conversion to/from a decimal major-unit value happens only at the I/O
//! boundary ([`Cents::from_decimal`], [`Cents::to_decimal`]).  Rounding is
//! half-away-from-zero to the nearest cent.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Cents per major unit.
pub const CENT_SCALE: i64 = 100;

// ---------------------------------------------------------------------------
// Cents newtype
// ---------------------------------------------------------------------------

/// A fixed-point monetary amount in integer cents.
///
/// 1 real = `Cents(100)`.
///
/// # Construction
///
/// Use [`Cents::new`] for explicit construction from a raw cent count, or
/// [`Cents::from_decimal`] at the decimal boundary.  There is intentionally
/// no `From<i64>` implementation — callers must be deliberate about when a
/// raw integer represents a monetary amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(i64);

impl Cents {
    /// Zero monetary amount.
    pub const ZERO: Cents = Cents(0);

    /// Maximum representable value.
    pub const MAX: Cents = Cents(i64::MAX);

    /// Construct from a raw cent count.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        Cents(raw)
    }

    /// Extract the underlying raw cent count.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Convert a decimal major-unit amount to cents, rounding half away
    /// from zero to the nearest cent.
    ///
    /// Non-finite input maps to [`Cents::ZERO`] — the decimal boundary sits
    /// on an interactive input path and must not panic.
    #[inline]
    pub fn from_decimal(amount: f64) -> Cents {
        if !amount.is_finite() {
            return Cents::ZERO;
        }
        // f64::round is half-away-from-zero, which is the rounding rule here.
        Cents((amount * CENT_SCALE as f64).round() as i64)
    }

    /// Convert back to a decimal major-unit amount.  Exact: `cents / 100`.
    #[inline]
    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / CENT_SCALE as f64
    }

    /// Saturating addition — clamps at [`Cents::MAX`] on overflow.
    #[inline]
    pub fn saturating_add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction — clamps at `i64::MIN` on underflow.
    #[inline]
    pub fn saturating_sub(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_sub(rhs.0))
    }

    /// `true` if this amount is non-negative.
    #[inline]
    pub fn is_non_negative(self) -> bool {
        self.0 >= 0
    }

    /// Multiply by a completion ratio in `[0, 1]`, rounding half away from
    /// zero to the nearest cent.
    ///
    /// The ratio is clamped to `[0, 1]` first, so a caller bug can never
    /// produce more than the full amount or a negative amount.
    #[inline]
    pub fn scale_by_ratio(self, ratio: f64) -> Cents {
        let r = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Cents((self.0 as f64 * r).round() as i64)
    }
}

// ---------------------------------------------------------------------------
// Arithmetic operators (closed over Cents)
// ---------------------------------------------------------------------------

impl Add for Cents {
    type Output = Cents;
    #[inline]
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Cents;
    #[inline]
    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl Neg for Cents {
    type Output = Cents;
    #[inline]
    fn neg(self) -> Cents {
        Cents(-self.0)
    }
}

impl AddAssign for Cents {
    #[inline]
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Cents {
    #[inline]
    fn sub_assign(&mut self, rhs: Cents) {
        self.0 -= rhs.0;
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / CENT_SCALE;
        let frac = (self.0 % CENT_SCALE).abs();
        // When |value| < R$1 and value is negative, whole truncates to 0,
        // losing the sign.  Emit "-0" explicitly in that case.
        if self.0 < 0 && whole == 0 {
            write!(f, "-{whole}.{frac:02}")
        } else {
            write!(f, "{whole}.{frac:02}")
        }
    }
}

// ---------------------------------------------------------------------------
// Drift-free summation
// ---------------------------------------------------------------------------

/// Sum a slice of decimal amounts without binary floating-point drift.
///
/// Every operand is converted to cents first, the cents are summed as
/// integers (saturating), and the total is converted back.  The result is
/// exactly what summing the true cent values gives:
/// `sum(&[0.10, 0.20, 0.30]) == 0.60`, never `0.6000000000000001`.
pub fn sum(amounts: &[f64]) -> f64 {
    let mut total = Cents::ZERO;
    for &a in amounts {
        total = total.saturating_add(Cents::from_decimal(a));
    }
    total.to_decimal()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
