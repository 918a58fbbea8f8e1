use lezzeat_core::{
    CheckoutError, Otp, OtpSource, PickupSelection, RngOtpSource, SlotWindow, TaxRate,
};
use lezzeat_test_utils::{cart_with, FixedClock, ScriptedOtpSource};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn empty_cart_cannot_open_checkout() {
    let cart = cart_with(&[]);
    let err = PickupSelection::open(&cart, &SlotWindow::default()).unwrap_err();
    assert_eq!(err, CheckoutError::EmptyCart);

    let notice = err.notice();
    assert_eq!(notice.title, "Empty Cart");
    assert_eq!(notice.body, "Please add items to your cart before checkout.");
}

#[test]
fn confirm_needs_a_selection() {
    let cart = cart_with(&[(6, 1)]);
    let mut pickup = PickupSelection::open(&cart, &SlotWindow::default()).unwrap();
    assert!(!pickup.can_confirm());
    assert_eq!(
        pickup.subtitle(),
        "Available pickup times: 9:30 AM - 3:45 PM"
    );

    let mut otp = ScriptedOtpSource::new(&[123_456]);
    let result = pickup.confirm(cart.totals(TaxRate::DEFAULT), &mut otp, &FixedClock::lunchtime());
    assert_eq!(result.unwrap_err(), CheckoutError::NoSlotSelected);
}

#[test]
fn unknown_label_keeps_previous_selection() {
    let cart = cart_with(&[(6, 1)]);
    let mut pickup = PickupSelection::open(&cart, &SlotWindow::default()).unwrap();
    pickup.select("11:00 AM").unwrap();

    assert_eq!(
        pickup.select("4:00 PM").unwrap_err(),
        CheckoutError::UnknownSlot("4:00 PM".into())
    );
    assert_eq!(pickup.selected().map(|s| s.label()), Some("11:00 AM"));
}

#[test]
fn confirmation_message_and_reset() {
    let cart = cart_with(&[(1, 2)]);
    let mut pickup = PickupSelection::open(&cart, &SlotWindow::default()).unwrap();
    pickup.select("12:00 PM").unwrap();

    let clock = FixedClock::lunchtime();
    let mut otp = ScriptedOtpSource::new(&[482_913]);
    let confirmation = pickup
        .confirm(cart.totals(TaxRate::DEFAULT), &mut otp, &clock)
        .unwrap();

    assert_eq!(confirmation.placed_at, clock.0);
    assert_eq!(confirmation.totals.total.to_string(), "178.50");
    let notice = confirmation.notice();
    assert_eq!(notice.title, "Order Confirmed!");
    assert_eq!(
        notice.body,
        "Your order has been placed.\nPickup Time: 12:00 PM\nOTP: 482913\n\nShow this OTP during pickup."
    );

    // Selection resets after confirming
    assert!(pickup.selected().is_none());
    assert!(!pickup.can_confirm());
}

#[test]
fn each_confirmation_gets_a_new_order_id() {
    let cart = cart_with(&[(5, 1)]);
    let mut pickup = PickupSelection::open(&cart, &SlotWindow::default()).unwrap();
    let mut otp = ScriptedOtpSource::new(&[111_111, 222_222]);
    let clock = FixedClock::lunchtime();
    let totals = cart.totals(TaxRate::DEFAULT);

    pickup.select("9:30 AM").unwrap();
    let first = pickup.confirm(totals, &mut otp, &clock).unwrap();
    pickup.select("9:30 AM").unwrap();
    let second = pickup.confirm(totals, &mut otp, &clock).unwrap();

    assert_ne!(first.order_id, second.order_id);
    assert_eq!(first.otp.to_string(), "111111");
    assert_eq!(second.otp.to_string(), "222222");
}

#[test]
fn ten_thousand_codes_in_range() {
    let mut source = RngOtpSource::from_entropy();
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let otp = source.next_otp();
        assert!((Otp::MIN..=Otp::MAX).contains(&otp.value()));
        assert_eq!(otp.to_string().len(), 6);
        seen.insert(otp);
    }
    // 10k draws from 900k values almost never collide much
    assert!(seen.len() > 9_900);
}

proptest! {
    #[test]
    fn prop_seeded_sources_repeat(seed in any::<u64>()) {
        let mut a = RngOtpSource::seeded(seed);
        let mut b = RngOtpSource::seeded(seed);
        for _ in 0..8 {
            let code = a.next_otp();
            prop_assert_eq!(code, b.next_otp());
            prop_assert!(!code.to_string().starts_with('0'));
        }
    }

    #[test]
    fn prop_otp_new_accepts_six_digits(code in 0u32..2_000_000) {
        let six_digits = (100_000..=999_999).contains(&code);
        prop_assert_eq!(Otp::new(code).is_some(), six_digits);
    }
}
