//! Order history
//!
//! Past orders are static sample data; placing an order does not add to
//! them.

use crate::types::Money;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Accepted by the canteen
    Confirmed,
    /// Being cooked
    Preparing,
    /// Waiting at the counter
    Ready,
    /// Collected
    PickedUp,
}

impl OrderStatus {
    /// Every status
    pub const ALL: [Self; 4] = [Self::Confirmed, Self::Preparing, Self::Ready, Self::PickedUp];

    /// Badge text
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready for Pickup",
            Self::PickedUp => "Completed",
        }
    }

    /// Wire tag, e.g. `picked_up`
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::PickedUp => "picked_up",
        }
    }

    /// Parse a [`Self::key`]
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// History filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFilter {
    /// Every order
    #[default]
    All,
    /// Orders in one status
    Status(OrderStatus),
}

impl OrderFilter {
    /// Whether `order` passes
    #[must_use]
    pub fn matches(self, order: &PastOrder) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => order.status == status,
        }
    }
}

/// One line of a past order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedItem {
    /// Dish name
    pub name: String,
    /// Units ordered
    pub quantity: u32,
    /// Unit price
    pub price: Money,
}

impl OrderedItem {
    /// `price * quantity`
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// `Qty: 2 @ ₹15.00 each`
    #[must_use]
    pub fn detail(&self, currency: &str) -> String {
        format!(
            "Qty: {} @ {} each",
            self.quantity,
            self.price.display_with(currency)
        )
    }
}

/// Past order card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastOrder {
    /// Sequence number
    pub id: u32,
    /// Heading, e.g. `Order #1`
    pub order_number: String,
    /// Current status
    pub status: OrderStatus,
    /// When it was placed, preformatted
    pub placed_time: String,
    /// Pickup slot label
    pub pickup_time: String,
    /// Amount charged
    pub total: Money,
    /// Lines
    pub items: Vec<OrderedItem>,
    /// Payment state text
    pub payment_status: String,
    /// Payment reference
    pub payment_id: Option<String>,
    /// Pickup code, absent once collected
    pub otp: Option<String>,
}

impl PastOrder {
    /// Sum of line totals; may differ from the charged [`Self::total`]
    #[must_use]
    pub fn items_total(&self) -> Money {
        self.items.iter().map(OrderedItem::line_total).sum()
    }
}

static HISTORY: Lazy<Vec<PastOrder>> = Lazy::new(|| {
    let item = |name: &str, quantity, rupees| OrderedItem {
        name: name.to_string(),
        quantity,
        price: Money::from_major(rupees),
    };
    vec![
        PastOrder {
            id: 1,
            order_number: "Order #1".into(),
            status: OrderStatus::Confirmed,
            placed_time: "Jul 31, 2025, 12:15 PM".into(),
            pickup_time: "2:36 PM".into(),
            total: Money::from_major(40),
            items: vec![item("Aloo Paratha", 1, 40)],
            payment_status: "Paid".into(),
            payment_id: Some("pay_1753964143112_uajsqhkxm".into()),
            otp: Some("123456".into()),
        },
        PastOrder {
            id: 2,
            order_number: "Order #2".into(),
            status: OrderStatus::Ready,
            placed_time: "Jul 30, 2025, 1:45 PM".into(),
            pickup_time: "3:15 PM".into(),
            total: Money::from_major(95),
            items: vec![item("Biryani", 1, 95)],
            payment_status: "Paid".into(),
            payment_id: Some("pay_1753864143112_xbjsqhkxn".into()),
            otp: Some("789012".into()),
        },
        PastOrder {
            id: 3,
            order_number: "Order #3".into(),
            status: OrderStatus::PickedUp,
            placed_time: "Jul 29, 2025, 11:30 AM".into(),
            pickup_time: "1:00 PM".into(),
            total: Money::from_major(55),
            items: vec![
                item("Samosa", 2, 15),
                item("Masala Chai", 1, 10),
                item("Pakora", 1, 25),
            ],
            payment_status: "Paid".into(),
            payment_id: Some("pay_1753764143112_ycjsqhkxo".into()),
            otp: None,
        },
    ]
});

/// Sample order history, newest first
#[must_use]
pub fn order_history() -> &'static [PastOrder] {
    &HISTORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(OrderStatus::Ready.label(), "Ready for Pickup");
        assert_eq!(OrderStatus::PickedUp.label(), "Completed");
        assert_eq!(OrderStatus::from_key("picked_up"), Some(OrderStatus::PickedUp));
        assert_eq!(OrderStatus::from_key("lost"), None);
    }

    #[test]
    fn filter_by_status() {
        let filtered = |filter: OrderFilter| {
            order_history()
                .iter()
                .filter(move |order| filter.matches(order))
        };
        assert_eq!(filtered(OrderFilter::All).count(), 3);
        let ready: Vec<_> = filtered(OrderFilter::Status(OrderStatus::Ready)).collect();
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].order_number, "Order #2");
        assert_eq!(filtered(OrderFilter::Status(OrderStatus::Preparing)).count(), 0);
    }

    #[test]
    fn totals_match_items() {
        for order in &order_history()[..2] {
            assert_eq!(order.items_total(), order.total, "{}", order.order_number);
        }
    }

    #[test]
    fn stated_total_is_shown_as_recorded() {
        // Order #3 was charged less than its lines add up to
        let order = &order_history()[2];
        assert_eq!(order.total, Money::from_major(55));
        assert_eq!(order.items_total(), Money::from_major(65));
    }

    #[test]
    fn line_detail() {
        let samosa = &order_history()[2].items[0];
        assert_eq!(samosa.detail("₹"), "Qty: 2 @ ₹15.00 each");
        assert_eq!(samosa.line_total().to_string(), "30.00");
    }
}
