//! Testing utilities for the LezzEat workspace
//!
//! Deterministic collaborators and storefront fixtures.

#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use lezzeat_core::{
    CartStore, Catalog, Clock, ItemId, Notice, Notifier, Otp, OtpSource, Storefront,
    StorefrontConfig,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// OTP source that cycles through fixed codes
#[derive(Debug, Clone)]
pub struct ScriptedOtpSource {
    codes: Vec<Otp>,
    next: usize,
}

impl ScriptedOtpSource {
    pub fn new(codes: &[u32]) -> Self {
        let codes: Vec<Otp> = codes
            .iter()
            .map(|&c| Otp::new(c).unwrap_or_else(|| panic!("{c} is not a six-digit code")))
            .collect();
        assert!(!codes.is_empty(), "scripted source needs at least one code");
        Self { codes, next: 0 }
    }
}

impl OtpSource for ScriptedOtpSource {
    fn next_otp(&mut self) -> Otp {
        let code = self.codes[self.next % self.codes.len()];
        self.next += 1;
        code
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// 2024-01-15 12:30 UTC
    pub fn lunchtime() -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0)
                .single()
                .expect("valid timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Notifier that keeps every notice; clones share the log
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.log.borrow().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.log.borrow().iter().map(|n| n.title.clone()).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.log.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.log.borrow_mut().push(notice.clone());
    }
}

/// Config with no simulated latency
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig::new().with_latency(Duration::ZERO)
}

/// Storefront with scripted OTPs, a fixed clock and a recording notifier
pub fn setup_test_storefront(codes: &[u32]) -> (Storefront, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let store = Storefront::builder(test_config())
        .otp_source(ScriptedOtpSource::new(codes))
        .clock(FixedClock::lunchtime())
        .notifier(notifier.clone())
        .start()
        .expect("default config is valid");
    (store, notifier)
}

/// Cart filled from the built-in menu, `(id, quantity)` pairs
pub fn cart_with(lines: &[(u32, u32)]) -> CartStore {
    let catalog = Catalog::builtin();
    let mut cart = CartStore::new();
    for &(id, quantity) in lines {
        let item = catalog
            .find(ItemId(id))
            .unwrap_or_else(|| panic!("item {id} not on the menu"));
        for _ in 0..quantity {
            cart.add_item(item);
        }
    }
    cart
}
