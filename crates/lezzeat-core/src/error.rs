//! Error types for the storefront
//!
//! Every failure in the storefront is an input problem: an empty cart at
//! checkout, a missing pickup time, an incomplete form. Each concern has its
//! own enum; [`StoreError`] unifies them for callers that drive the whole
//! storefront.

use crate::notice::Notice;
use crate::types::ItemId;

/// Main storefront error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Cart mutation failed
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout flow rejected the action
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Pickup window is malformed
    #[error("slot window error: {0}")]
    Slot(#[from] SlotError),

    /// Form input is invalid
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StoreError {
    /// Check if the error should be shown to the user as a blocking notice
    #[inline]
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Checkout(_) | Self::Validation(_) | Self::Cart(_))
    }

    /// Notice to surface for user-facing errors
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Checkout(e) => Some(e.notice()),
            Self::Validation(e) => Some(e.notice()),
            Self::Cart(e) => Some(Notice::error(e.to_string())),
            Self::Slot(_) | Self::Config(_) => None,
        }
    }
}

/// Cart store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// Item ID is not on the menu
    #[error("item {0} is not on the menu")]
    UnknownItem(ItemId),

    /// Item ID has no line in the cart
    #[error("item {0} is not in the cart")]
    NotInCart(ItemId),
}

/// Checkout flow errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    /// Checkout attempted with nothing in the cart
    #[error("cart is empty")]
    EmptyCart,

    /// Confirm pressed before a pickup time was chosen
    #[error("no pickup time selected")]
    NoSlotSelected,

    /// Label is not one of the generated pickup slots
    #[error("unknown pickup time: {0:?}")]
    UnknownSlot(String),

    /// Pickup selection is not open
    #[error("pickup selection is not open")]
    NotOpen,
}

impl CheckoutError {
    /// Blocking notice for this error
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::EmptyCart => Notice::new(
                "Empty Cart",
                "Please add items to your cart before checkout.",
            ),
            Self::NoSlotSelected => Notice::error("Please select a pickup time."),
            Self::UnknownSlot(label) => {
                Notice::error(format!("{label} is not an available pickup time."))
            }
            Self::NotOpen => Notice::error("Proceed to checkout first."),
        }
    }
}

/// Pickup window errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// Time string is not `HH:MM`
    #[error("invalid time of day: {0:?}")]
    InvalidTime(String),

    /// Minute-of-day outside 00:00..=23:59
    #[error("minute {0} is outside the day")]
    OutOfDay(u32),

    /// Window start is after its end
    #[error("window start {start} is after end {end}")]
    InvertedWindow {
        /// Start as `HH:MM`
        start: String,
        /// End as `HH:MM`
        end: String,
    },

    /// Step of zero minutes
    #[error("slot step must be positive")]
    ZeroStep,
}

/// Form validation errors, checked in this order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// At least one required field is blank
    #[error("Please fill in all fields")]
    MissingFields,

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password shorter than the configured minimum
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort {
        /// Minimum length in characters
        min: usize,
    },
}

impl ValidationError {
    /// Blocking notice for this error
    #[inline]
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// TOML is malformed or has wrong types
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but are inconsistent
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<SlotError> for ConfigError {
    fn from(value: SlotError) -> Self {
        Self::Invalid(value.to_string())
    }
}
