//! Storefront context
//!
//! Owns every store the screens read and mutate: catalog, cart, theme,
//! account service and the open pickup selection. The OTP source, clock and
//! notifier are injected through [`StorefrontBuilder`]. A storefront is
//! created by [`Storefront::start`] (or the builder) and torn down by
//! [`Storefront::shutdown`].

use crate::account::{AccountService, LoginForm, Session, SignupForm};
use crate::cart::{CartLine, CartStore};
use crate::catalog::Catalog;
use crate::checkout::{OrderConfirmation, PickupSelection};
use crate::clock::{Clock, SystemClock};
use crate::config::StorefrontConfig;
use crate::error::{CartError, CheckoutError, StoreError, ValidationError};
use crate::notice::{Notice, Notifier, TracingNotifier};
use crate::orders::{order_history, OrderFilter, PastOrder};
use crate::otp::{OtpSource, RngOtpSource};
use crate::pricing::CartTotals;
use crate::profile::UserProfile;
use crate::slots::{SlotWindow, TimeSlot};
use crate::theme::{ThemeMode, ThemeStore};
use crate::types::ItemId;
use std::fmt;

/// Builder for [`Storefront`]
pub struct StorefrontBuilder {
    config: StorefrontConfig,
    catalog: Option<Catalog>,
    history: Option<Vec<PastOrder>>,
    otp: Option<Box<dyn OtpSource>>,
    clock: Option<Box<dyn Clock>>,
    notifier: Option<Box<dyn Notifier>>,
}

impl StorefrontBuilder {
    /// Start from `config`
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            catalog: None,
            history: None,
            otp: None,
            clock: None,
            notifier: None,
        }
    }

    /// Use a custom menu instead of the built-in one
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use a custom order history instead of the sample one
    #[must_use]
    pub fn history(mut self, history: Vec<PastOrder>) -> Self {
        self.history = Some(history);
        self
    }

    /// Pickup code source
    #[must_use]
    pub fn otp_source(mut self, otp: impl OtpSource + 'static) -> Self {
        self.otp = Some(Box::new(otp));
        self
    }

    /// Wall clock
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Notice surface
    #[must_use]
    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Validate config and start the storefront
    ///
    /// # Errors
    /// Returns error if the configuration is invalid
    pub fn start(self) -> Result<Storefront, StoreError> {
        self.config.validate()?;
        let window = self.config.slot_window()?;
        let otp = self.otp.unwrap_or_else(|| match self.config.otp.seed {
            Some(seed) => Box::new(RngOtpSource::seeded(seed)),
            None => Box::new(RngOtpSource::from_entropy()),
        });
        let accounts = AccountService::new(
            self.config.simulated_latency(),
            self.config.min_password_len,
        );

        tracing::info!(
            pickup = %window.describe(),
            tax = %self.config.tax_rate(),
            "storefront started"
        );

        Ok(Storefront {
            window,
            catalog: self.catalog.unwrap_or_else(|| Catalog::builtin().clone()),
            history: self.history.unwrap_or_else(|| order_history().to_vec()),
            cart: CartStore::new(),
            theme: ThemeStore::new(self.config.theme),
            accounts,
            profile: UserProfile::sample(),
            session: None,
            pickup: None,
            otp,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            notifier: self.notifier.unwrap_or_else(|| Box::new(TracingNotifier)),
            confirmed: 0,
            config: self.config,
        })
    }
}

/// What a storefront held when it shut down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownSummary {
    /// Orders confirmed during the run
    pub orders_confirmed: usize,
    /// Cart lines discarded
    pub cart_lines_dropped: usize,
    /// Whether a pickup selection was still open
    pub checkout_abandoned: bool,
}

/// Running storefront
pub struct Storefront {
    config: StorefrontConfig,
    window: SlotWindow,
    catalog: Catalog,
    history: Vec<PastOrder>,
    cart: CartStore,
    theme: ThemeStore,
    accounts: AccountService,
    profile: UserProfile,
    session: Option<Session>,
    pickup: Option<PickupSelection>,
    otp: Box<dyn OtpSource>,
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
    confirmed: usize,
}

impl fmt::Debug for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("window", &self.window)
            .field("cart_lines", &self.cart.len())
            .field("theme", &self.theme.mode())
            .field("session", &self.session)
            .field("checkout_open", &self.pickup.is_some())
            .finish_non_exhaustive()
    }
}

impl Storefront {
    /// Start with default collaborators
    ///
    /// # Errors
    /// Returns error if the configuration is invalid
    pub fn start(config: StorefrontConfig) -> Result<Self, StoreError> {
        StorefrontBuilder::new(config).start()
    }

    /// Builder for injecting collaborators
    #[inline]
    #[must_use]
    pub fn builder(config: StorefrontConfig) -> StorefrontBuilder {
        StorefrontBuilder::new(config)
    }

    /// Tear down, dropping the cart and any open checkout
    pub fn shutdown(self) -> ShutdownSummary {
        let summary = ShutdownSummary {
            orders_confirmed: self.confirmed,
            cart_lines_dropped: self.cart.len(),
            checkout_abandoned: self.pickup.is_some(),
        };
        tracing::info!(
            orders = summary.orders_confirmed,
            dropped = summary.cart_lines_dropped,
            "storefront stopped"
        );
        summary
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Menu
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Pickup window
    #[inline]
    #[must_use]
    pub fn slot_window(&self) -> &SlotWindow {
        &self.window
    }

    // Cart

    /// Cart contents
    #[inline]
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Cart lines in order
    pub fn cart_lines(&self) -> impl ExactSizeIterator<Item = &CartLine> {
        self.cart.lines()
    }

    /// Add one of a menu item; returns its new quantity
    ///
    /// # Errors
    /// Returns error if the item is not on the menu
    pub fn add_to_cart(&mut self, id: ItemId) -> Result<u32, StoreError> {
        let item = self.catalog.find(id).ok_or(CartError::UnknownItem(id))?;
        Ok(self.cart.add_item(item))
    }

    /// Set a line's quantity, 0 removes
    ///
    /// # Errors
    /// Returns error if the item is not in the cart
    pub fn set_quantity(&mut self, id: ItemId, quantity: u32) -> Result<(), StoreError> {
        Ok(self.cart.set_quantity(id, quantity)?)
    }

    /// `+` on a cart line
    ///
    /// # Errors
    /// Returns error if the item is not in the cart
    pub fn increment(&mut self, id: ItemId) -> Result<u32, StoreError> {
        Ok(self.cart.increment(id)?)
    }

    /// `-` on a cart line
    ///
    /// # Errors
    /// Returns error if the item is not in the cart
    pub fn decrement(&mut self, id: ItemId) -> Result<u32, StoreError> {
        Ok(self.cart.decrement(id)?)
    }

    /// Trash button on a cart line
    ///
    /// # Errors
    /// Returns error if the item is not in the cart
    pub fn remove_from_cart(&mut self, id: ItemId) -> Result<(), StoreError> {
        Ok(self.cart.remove_item(id)?)
    }

    /// Current totals at the configured tax rate
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.cart.totals(self.config.tax_rate())
    }

    // Checkout

    /// "Proceed to Checkout"; raises the empty-cart notice when refused
    ///
    /// # Errors
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no lines
    pub fn begin_checkout(&mut self) -> Result<&PickupSelection, StoreError> {
        match PickupSelection::open(&self.cart, &self.window) {
            Ok(selection) => {
                tracing::info!(lines = self.cart.len(), "checkout opened");
                Ok(self.pickup.insert(selection))
            }
            Err(e) => {
                tracing::warn!(error = %e, "checkout refused");
                self.notifier.notify(&e.notice());
                Err(e.into())
            }
        }
    }

    /// Open pickup selection, if any
    #[inline]
    #[must_use]
    pub fn pickup(&self) -> Option<&PickupSelection> {
        self.pickup.as_ref()
    }

    /// Whether the pickup selection is open
    #[inline]
    #[must_use]
    pub fn is_checkout_open(&self) -> bool {
        self.pickup.is_some()
    }

    /// Tap a pickup slot
    ///
    /// # Errors
    /// Returns error if checkout is closed or the label is not a slot
    pub fn select_pickup(&mut self, label: &str) -> Result<TimeSlot, StoreError> {
        let pickup = self.pickup.as_mut().ok_or(CheckoutError::NotOpen)?;
        let slot = pickup.select(label)?.clone();
        tracing::debug!(slot = %slot, "pickup selected");
        Ok(slot)
    }

    /// "Confirm Order"; raises the confirmation notice and closes checkout
    ///
    /// # Errors
    /// Returns error if checkout is closed or no slot is selected
    pub fn confirm_order(&mut self) -> Result<OrderConfirmation, StoreError> {
        let totals = self.totals();
        let pickup = self.pickup.as_mut().ok_or(CheckoutError::NotOpen)?;
        let confirmation = pickup.confirm(totals, &mut *self.otp, &*self.clock)?;
        self.pickup = None;
        self.confirmed += 1;
        self.notifier.notify(&confirmation.notice());
        Ok(confirmation)
    }

    /// Close checkout without ordering
    pub fn cancel_checkout(&mut self) {
        if self.pickup.take().is_some() {
            tracing::debug!("checkout cancelled");
        }
    }

    // Theme

    /// Active theme
    #[inline]
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Sun/moon button
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle()
    }

    // Account

    /// Signed-in user, if any
    #[inline]
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Sign in; validation failures raise a notice
    ///
    /// # Errors
    /// Returns error if the form is incomplete
    pub async fn login(&mut self, form: &LoginForm) -> Result<&Session, StoreError> {
        match self.accounts.login(form).await {
            Ok(session) => Ok(self.session.insert(session)),
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Register; raises the success notice or the validation notice
    ///
    /// # Errors
    /// Returns the first validation failure
    pub async fn sign_up(&mut self, form: &SignupForm) -> Result<(), StoreError> {
        match self.accounts.sign_up(form).await {
            Ok(notice) => {
                self.notifier.notify(&notice);
                Ok(())
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Sign out; raises the logout prompt
    pub fn logout(&mut self) {
        self.notifier.notify(&UserProfile::logout_notice());
        if let Some(session) = self.session.take() {
            tracing::info!(username = %session.username, "signed out");
        }
    }

    fn reject(&mut self, e: ValidationError) -> StoreError {
        self.notifier.notify(&e.notice());
        e.into()
    }

    // Read-only screens

    /// Profile card
    #[inline]
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Camera button on the profile card; raises the photo picker notice
    pub fn request_photo_upload(&mut self) {
        tracing::debug!("photo upload requested");
        self.notifier.notify(&UserProfile::photo_upload_notice());
    }

    /// Order history, filtered
    pub fn order_history(&self, filter: OrderFilter) -> impl Iterator<Item = &PastOrder> {
        self.history.iter().filter(move |order| filter.matches(order))
    }

    /// Raise a notice through the injected notifier
    pub fn notify(&mut self, notice: &Notice) {
        self.notifier.notify(notice);
    }
}
