//! Order confirmation flow
//!
//! Checkout opens a [`PickupSelection`] over the generated slots. It only
//! opens for a non-empty cart. Confirm is disabled until a slot is selected;
//! confirming draws a pickup code, stamps the order and resets the
//! selection. Nothing is persisted.

use crate::cart::CartStore;
use crate::clock::Clock;
use crate::error::CheckoutError;
use crate::notice::Notice;
use crate::otp::{Otp, OtpSource};
use crate::pricing::CartTotals;
use crate::slots::{generate_slots, SlotWindow, TimeSlot};
use crate::types::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A placed order, shown once and then dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Order ID
    pub order_id: OrderId,
    /// Chosen pickup slot
    pub pickup_time: TimeSlot,
    /// Code to show at the counter
    pub otp: Otp,
    /// When the order was confirmed
    pub placed_at: DateTime<Utc>,
    /// Cart totals at confirmation
    pub totals: CartTotals,
}

impl OrderConfirmation {
    /// Confirmation text
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Your order has been placed.\nPickup Time: {}\nOTP: {}\n\nShow this OTP during pickup.",
            self.pickup_time, self.otp
        )
    }

    /// "Order Confirmed!" notice
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::new("Order Confirmed!", self.message())
    }
}

/// Open pickup-time picker
#[derive(Debug, Clone)]
pub struct PickupSelection {
    window: SlotWindow,
    slots: Vec<TimeSlot>,
    selected: Option<usize>,
}

impl PickupSelection {
    /// Open the picker for `cart`
    ///
    /// # Errors
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no lines
    pub fn open(cart: &CartStore, window: &SlotWindow) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self {
            window: *window,
            slots: generate_slots(window),
            selected: None,
        })
    }

    /// Selectable slots in time order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// "Available pickup times" subtitle
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("Available pickup times: {}", self.window.describe())
    }

    /// Select the slot with `label`
    ///
    /// # Errors
    /// Returns [`CheckoutError::UnknownSlot`] if no slot has that label
    pub fn select(&mut self, label: &str) -> Result<&TimeSlot, CheckoutError> {
        let label = label.trim();
        let index = self
            .slots
            .iter()
            .position(|slot| slot.label == label)
            .ok_or_else(|| CheckoutError::UnknownSlot(label.to_string()))?;
        self.selected = Some(index);
        Ok(&self.slots[index])
    }

    /// Currently selected slot
    #[must_use]
    pub fn selected(&self) -> Option<&TimeSlot> {
        self.selected.map(|i| &self.slots[i])
    }

    /// Drop the selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Whether confirm is enabled
    #[inline]
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }

    /// Place the order for the selected slot
    ///
    /// # Errors
    /// Returns [`CheckoutError::NoSlotSelected`] if nothing is selected
    pub fn confirm<O, C>(
        &mut self,
        totals: CartTotals,
        otp: &mut O,
        clock: &C,
    ) -> Result<OrderConfirmation, CheckoutError>
    where
        O: OtpSource + ?Sized,
        C: Clock + ?Sized,
    {
        let index = self.selected.take().ok_or(CheckoutError::NoSlotSelected)?;
        let confirmation = OrderConfirmation {
            order_id: OrderId::new(),
            pickup_time: self.slots[index].clone(),
            otp: otp.next_otp(),
            placed_at: clock.now(),
            totals,
        };
        tracing::info!(
            order = %confirmation.order_id,
            pickup = %confirmation.pickup_time,
            total = %confirmation.totals.total,
            "order confirmed"
        );
        Ok(confirmation)
    }
}
