//! LezzEat Core - campus canteen storefront
//!
//! The state and rules behind the ordering screens:
//! - Menu catalog grouped into sections
//! - Cart with per-line quantities and tax-inclusive totals
//! - Pickup time-slot generation for the canteen's service window
//! - Order confirmation with a six-digit pickup OTP
//! - Static order history, profile card, theme and mock accounts
//!
//! # Example
//!
//! ```rust,ignore
//! use lezzeat_core::{ItemId, Storefront, StorefrontConfig};
//!
//! # fn example() -> Result<(), lezzeat_core::StoreError> {
//! let mut store = Storefront::start(StorefrontConfig::new().with_otp_seed(7))?;
//! store.add_to_cart(ItemId(1))?;
//! store.begin_checkout()?;
//! store.select_pickup("12:00 PM")?;
//! let confirmation = store.confirm_order()?;
//! println!("pickup {} with OTP {}", confirmation.pickup_time, confirmation.otp);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod notice;
pub mod orders;
pub mod otp;
pub mod pricing;
pub mod profile;
pub mod slots;
pub mod storefront;
pub mod theme;
pub mod types;

// Re-exports for convenience
pub use account::{AccountService, LoginForm, Session, SignupForm};
pub use cart::{CartLine, CartStore};
pub use catalog::{add_button_label, Catalog, MenuSection};
pub use checkout::{OrderConfirmation, PickupSelection};
pub use clock::{Clock, SystemClock};
pub use config::{LoggingConfig, OtpConfig, PickupConfig, StorefrontConfig};
pub use error::{
    CartError, CheckoutError, ConfigError, SlotError, StoreError, ValidationError,
};
pub use notice::{Notice, Notifier, TracingNotifier};
pub use orders::{order_history, OrderFilter, OrderStatus, OrderedItem, PastOrder};
pub use otp::{Otp, OtpSource, RngOtpSource};
pub use pricing::{CartTotals, TaxRate};
pub use profile::{ProfileField, UserProfile};
pub use slots::{generate_slots, SlotIter, SlotWindow, TimeOfDay, TimeSlot};
pub use storefront::{ShutdownSummary, Storefront, StorefrontBuilder};
pub use theme::{ThemeMode, ThemeStore};
pub use types::{Category, ItemId, MenuItem, Money, OrderId};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a storefront
    pub use crate::{
        CartTotals, Catalog, ItemId, MenuItem, Money, Notice, Notifier, OrderConfirmation,
        OrderFilter, Otp, OtpSource, SlotWindow, StoreError, Storefront, StorefrontConfig,
        TimeSlot,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
