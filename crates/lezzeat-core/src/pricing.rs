//! Cart aggregation
//!
//! `subtotal = sum(unit_price * quantity)`, `tax = subtotal * rate` rounded to
//! the paisa, `total = subtotal + tax`. Totals are recomputed from the lines
//! on every read.

use crate::types::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tax rate in basis points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// 5% sales tax
    pub const DEFAULT: Self = Self(500);

    /// From basis points (500 = 5%)
    #[inline]
    #[must_use]
    pub const fn from_bps(bps: u32) -> Self {
        Self(bps)
    }

    /// Basis points
    #[inline]
    #[must_use]
    pub const fn bps(self) -> u32 {
        self.0
    }

    /// Tax owed on `amount`
    #[inline]
    #[must_use]
    pub fn tax_on(self, amount: Money) -> Money {
        amount.apply_rate_bps(self.0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else {
            let frac = format!("{frac:02}");
            write!(f, "{whole}.{}%", frac.trim_end_matches('0'))
        }
    }
}

/// Subtotal, tax and grand total of a cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of line totals
    pub subtotal: Money,
    /// Tax on the subtotal
    pub tax: Money,
    /// Subtotal plus tax
    pub total: Money,
    /// Rate the tax was computed at
    pub rate: TaxRate,
}

impl CartTotals {
    /// Totals from `(unit_price, quantity)` pairs
    #[must_use]
    pub fn compute<I>(lines: I, rate: TaxRate) -> Self
    where
        I: IntoIterator<Item = (Money, u32)>,
    {
        let subtotal: Money = lines.into_iter().map(|(price, qty)| price * qty).sum();
        Self::from_subtotal(subtotal, rate)
    }

    /// Totals from a precomputed subtotal
    #[must_use]
    pub fn from_subtotal(subtotal: Money, rate: TaxRate) -> Self {
        let tax = rate.tax_on(subtotal);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
            rate,
        }
    }

    /// Summary rows as shown under the cart, e.g. `("Tax (5%):", "₹8.50")`
    #[must_use]
    pub fn rows(&self, currency: &str) -> [(String, String); 3] {
        [
            ("Subtotal:".to_string(), self.subtotal.display_with(currency)),
            (format!("Tax ({}):", self.rate), self.tax.display_with(currency)),
            ("Total:".to_string(), self.total.display_with(currency)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thali_for_two() {
        let totals = CartTotals::compute([(Money::from_major(85), 2)], TaxRate::DEFAULT);
        assert_eq!(totals.subtotal.to_string(), "170.00");
        assert_eq!(totals.tax.to_string(), "8.50");
        assert_eq!(totals.total.to_string(), "178.50");
    }

    #[test]
    fn empty_totals_are_zero() {
        let totals = CartTotals::compute(std::iter::empty(), TaxRate::DEFAULT);
        assert_eq!(totals.total, Money::ZERO);
    }

    #[test]
    fn rate_display() {
        assert_eq!(TaxRate::DEFAULT.to_string(), "5%");
        assert_eq!(TaxRate::from_bps(1250).to_string(), "12.5%");
        assert_eq!(TaxRate::from_bps(1805).to_string(), "18.05%");
    }

    #[test]
    fn summary_rows() {
        let totals = CartTotals::compute([(Money::from_major(85), 2)], TaxRate::DEFAULT);
        let rows = totals.rows("₹");
        assert_eq!(rows[1], ("Tax (5%):".to_string(), "₹8.50".to_string()));
        assert_eq!(rows[2].1, "₹178.50");
    }
}
