//! Core types for the storefront
//!
//! Defines the value types shared by every store:
//! - Item and order identifiers
//! - Money in integer minor units
//! - Menu items and their categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use ulid::Ulid;

/// Menu item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Unique order identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Ulid);

impl OrderId {
    /// Generate new order ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount of money in minor units (paise)
///
/// Prices on the menu are whole rupees, tax is rounded to the paisa, so every
/// amount the storefront shows is exact in this representation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// From minor units
    #[inline]
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// From whole major units (rupees)
    #[inline]
    #[must_use]
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Minor units
    #[inline]
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Value in major units as a float, for display math only
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_major_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Apply a rate in basis points, rounding half away from zero to the paisa
    #[must_use]
    pub fn apply_rate_bps(self, bps: u32) -> Self {
        let scaled = i128::from(self.0) * i128::from(bps);
        let half = if scaled >= 0 { 5_000 } else { -5_000 };
        #[allow(clippy::cast_possible_truncation)]
        Self(((scaled + half) / 10_000) as i64)
    }

    /// Format with a currency symbol prefix, e.g. `₹170.00`
    #[must_use]
    pub fn display_with(self, symbol: &str) -> String {
        format!("{symbol}{self}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * i64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Item category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Chef's special of the day
    Special,
    /// Snacks
    Snacks,
    /// Hot and cold drinks
    Beverages,
    /// Full meals
    Meals,
    /// Sweets
    Desserts,
}

impl Category {
    /// Lowercase tag used in the menu data
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Special => "special",
            Self::Snacks => "snacks",
            Self::Beverages => "beverages",
            Self::Meals => "meals",
            Self::Desserts => "desserts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item ID
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: Money,
    /// Photo URL
    pub image_url: String,
    /// Category tag
    pub category: Category,
}

impl MenuItem {
    /// Create new menu item
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, price_rupees: i64, category: Category) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            price: Money::from_major(price_rupees),
            image_url: String::new(),
            category,
        }
    }

    /// With photo URL
    #[inline]
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }
}
