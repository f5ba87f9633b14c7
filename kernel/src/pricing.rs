//! Price derivation for a stay: nights x nightly rate plus tax.
//!
//! This is the one place the formula lives. The browser gets its numbers
//! from the quote endpoint instead of re-deriving them, so client and
//! server can never drift apart.
//!
//! All arithmetic is integer cents. Rates arrive as fixed-point decimal
//! strings ("159", "249.50") and are parsed exactly, so rounding happens
//! once, at the cent boundary, and `total == subtotal + taxes` holds by
//! construction.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Default tax rate in basis points: 15%.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1500;

/// A non-negative monetary amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(i64);

impl Cents {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Lossless conversion for JSON output; exact for any 2-decimal amount
    /// this system can represent.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a non-negative fixed-point decimal: {0:?}")]
pub struct ParsePriceError(String);

/// Parses a decimal string with at most two fraction digits into cents.
/// Negative amounts and anything finer than a cent are rejected.
impl FromStr for Cents {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePriceError(s.to_string());
        let (whole, fraction) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() || fraction.len() > 2 {
            return Err(err());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }
        let whole: i64 = whole.parse().map_err(|_| err())?;
        let fraction: i64 = if fraction.is_empty() {
            0
        } else {
            // "5" means 50 cents, "05" means 5.
            let parsed: i64 = fraction.parse().map_err(|_| err())?;
            if fraction.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };
        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Cents)
            .ok_or_else(err)
    }
}

/// Number of nights between two calendar dates. May be zero or negative;
/// callers must refuse to price a non-positive range.
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub subtotal: Cents,
    pub taxes: Cents,
    pub total: Cents,
}

/// Prices a stay of `nights` nights at `rate` per night.
///
/// Taxes round half-up at the cent boundary; the total is the sum of the
/// two rounded parts, never an independently rounded product.
pub fn quote(rate: Cents, nights: i64, tax_rate_bps: u32) -> Quote {
    let subtotal = Cents(rate.cents() * nights);
    let taxes = Cents(
        ((subtotal.cents() as i128 * tax_rate_bps as i128 + 5_000) / 10_000) as i64,
    );
    let total = Cents(subtotal.cents() + taxes.cents());
    Quote {
        subtotal,
        taxes,
        total,
    }
}
