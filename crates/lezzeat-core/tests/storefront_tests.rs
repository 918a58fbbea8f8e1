use lezzeat_core::{
    order_history, CartError, CheckoutError, ItemId, OrderFilter, OrderStatus, StoreError,
    Storefront, StorefrontConfig, ThemeMode,
};
use lezzeat_test_utils::{setup_test_storefront, test_config, FixedClock, RecordingNotifier};
use pretty_assertions::assert_eq;

#[test]
fn checkout_on_empty_cart_raises_notice() {
    let (mut store, notifier) = setup_test_storefront(&[654_321]);

    let err = store.begin_checkout().unwrap_err();
    assert!(matches!(err, StoreError::Checkout(CheckoutError::EmptyCart)));
    assert!(!store.is_checkout_open());
    assert_eq!(notifier.titles(), ["Empty Cart"]);
}

#[test]
fn full_order_flow() {
    let (mut store, notifier) = setup_test_storefront(&[654_321]);

    store.add_to_cart(ItemId(1)).unwrap();
    store.add_to_cart(ItemId(1)).unwrap();
    assert_eq!(store.cart().quantity_of(ItemId(1)), 2);

    let pickup = store.begin_checkout().unwrap();
    assert_eq!(pickup.slots().len(), 26);

    // Confirm is refused until a slot is chosen
    assert!(matches!(
        store.confirm_order(),
        Err(StoreError::Checkout(CheckoutError::NoSlotSelected))
    ));
    assert!(notifier.notices().is_empty());

    let slot = store.select_pickup("12:00 PM").unwrap();
    assert_eq!(slot.label(), "12:00 PM");

    let confirmation = store.confirm_order().unwrap();
    assert_eq!(confirmation.otp.to_string(), "654321");
    assert_eq!(confirmation.placed_at, FixedClock::lunchtime().0);
    assert_eq!(confirmation.totals.total.to_string(), "178.50");
    assert!(!store.is_checkout_open());

    let notice = notifier.last().unwrap();
    assert_eq!(notice.title, "Order Confirmed!");
    assert!(notice.body.contains("Pickup Time: 12:00 PM"));
    assert!(notice.body.contains("OTP: 654321"));

    // The cart is left as it was
    assert_eq!(store.cart().len(), 1);

    let summary = store.shutdown();
    assert_eq!(summary.orders_confirmed, 1);
    assert_eq!(summary.cart_lines_dropped, 1);
}

#[test]
fn select_requires_open_checkout() {
    let (mut store, _) = setup_test_storefront(&[100_000]);
    assert!(matches!(
        store.select_pickup("9:30 AM"),
        Err(StoreError::Checkout(CheckoutError::NotOpen))
    ));
    assert!(matches!(
        store.confirm_order(),
        Err(StoreError::Checkout(CheckoutError::NotOpen))
    ));
}

#[test]
fn cancel_and_shutdown_with_open_checkout() {
    let (mut store, _) = setup_test_storefront(&[100_000]);
    store.add_to_cart(ItemId(9)).unwrap();
    store.begin_checkout().unwrap();
    store.cancel_checkout();
    assert!(!store.is_checkout_open());

    store.begin_checkout().unwrap();
    let summary = store.shutdown();
    assert!(summary.checkout_abandoned);
    assert_eq!(summary.orders_confirmed, 0);
}

#[test]
fn cart_edits_through_storefront() {
    let (mut store, _) = setup_test_storefront(&[100_000]);
    store.add_to_cart(ItemId(4)).unwrap();
    store.add_to_cart(ItemId(5)).unwrap();

    assert_eq!(store.increment(ItemId(4)).unwrap(), 2);
    assert_eq!(store.decrement(ItemId(5)).unwrap(), 0);
    assert_eq!(store.cart().len(), 1);

    store.set_quantity(ItemId(4), 5).unwrap();
    assert_eq!(store.totals().subtotal.to_string(), "75.00");

    assert!(matches!(
        store.remove_from_cart(ItemId(5)),
        Err(StoreError::Cart(CartError::NotInCart(ItemId(5))))
    ));
    store.remove_from_cart(ItemId(4)).unwrap();
    assert!(store.cart().is_empty());
}

#[test]
fn custom_tax_rate_applies() {
    let store_config = test_config().with_tax_rate_bps(1_250);
    let mut store = Storefront::builder(store_config)
        .notifier(RecordingNotifier::new())
        .start()
        .unwrap();
    store.add_to_cart(ItemId(14)).unwrap();
    let rows = store.totals().rows("₹");
    assert_eq!(rows[1], ("Tax (12.5%):".to_string(), "₹11.88".to_string()));
}

#[test]
fn invalid_config_does_not_start() {
    let mut config = StorefrontConfig::new();
    config.pickup.step_minutes = 0;
    assert!(matches!(
        Storefront::start(config),
        Err(StoreError::Config(_))
    ));
}

#[test]
fn theme_toggles() {
    let (mut store, _) = setup_test_storefront(&[100_000]);
    assert_eq!(store.theme(), ThemeMode::Light);
    assert_eq!(store.toggle_theme(), ThemeMode::Dark);
    assert_eq!(store.toggle_theme(), ThemeMode::Light);
}

#[test]
fn history_filters_by_status() {
    let (store, _) = setup_test_storefront(&[100_000]);
    assert_eq!(store.order_history(OrderFilter::All).count(), 3);

    let ready: Vec<_> = store
        .order_history(OrderFilter::Status(OrderStatus::Ready))
        .collect();
    assert!(ready.iter().all(|o| o.status == OrderStatus::Ready));
}

#[test]
fn profile_actions_raise_notices() {
    let (mut store, notifier) = setup_test_storefront(&[100_000]);

    store.request_photo_upload();
    store.logout();

    let notices = notifier.notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].title, "Update Profile Photo");
    assert_eq!(notices[0].body, "Choose an option: Camera or Gallery");
    assert_eq!(notices[1].title, "Logout");
    assert_eq!(notices[1].body, "Are you sure you want to logout?");
    assert!(store.session().is_none());
}

#[test]
fn storefront_owns_its_history() {
    let only_ready: Vec<_> = order_history()
        .iter()
        .filter(|order| order.status == OrderStatus::Ready)
        .cloned()
        .collect();
    let store = Storefront::builder(test_config())
        .history(only_ready)
        .notifier(RecordingNotifier::new())
        .start()
        .unwrap();

    let numbers: Vec<_> = store
        .order_history(OrderFilter::All)
        .map(|order| order.order_number.as_str())
        .collect();
    assert_eq!(numbers, ["Order #2"]);
    assert_eq!(
        store
            .order_history(OrderFilter::Status(OrderStatus::PickedUp))
            .count(),
        0
    );
}
