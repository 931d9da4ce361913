//! Cart and waitlist intents raised by the quick view.
//!
//! The storefront never fulfils an intent. It hands each one to an
//! [`IntentHandler`] supplied by the embedding shell and moves on.

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_catalog::Product;
use storefront_events::{Event, EventBus};

/// Shopper asked to put `product` in `size` into the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartIntent {
    pub product: Product,
    pub size: String,
    pub requested_at: DateTime<Utc>,
}

/// Shopper asked to be notified at `email` when `product` in `size` is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistIntent {
    pub product: Product,
    pub email: String,
    pub size: String,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorefrontIntent {
    Cart(CartIntent),
    Waitlist(WaitlistIntent),
}

impl Event for StorefrontIntent {
    fn event_type(&self) -> &'static str {
        match self {
            StorefrontIntent::Cart(_) => "storefront.cart.requested",
            StorefrontIntent::Waitlist(_) => "storefront.waitlist.requested",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StorefrontIntent::Cart(i) => i.requested_at,
            StorefrontIntent::Waitlist(i) => i.requested_at,
        }
    }
}

/// Receives intents from a listing. Fire-and-forget: handlers own their own
/// failure reporting.
pub trait IntentHandler {
    fn on_add_to_cart(&mut self, intent: &CartIntent);

    fn on_add_to_waitlist(&mut self, intent: &WaitlistIntent);
}

impl<H> IntentHandler for &mut H
where
    H: IntentHandler + ?Sized,
{
    fn on_add_to_cart(&mut self, intent: &CartIntent) {
        (**self).on_add_to_cart(intent)
    }

    fn on_add_to_waitlist(&mut self, intent: &WaitlistIntent) {
        (**self).on_add_to_waitlist(intent)
    }
}

/// Keeps every intent it receives, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingIntents {
    pub carts: Vec<CartIntent>,
    pub waitlist: Vec<WaitlistIntent>,
}

impl RecordingIntents {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IntentHandler for RecordingIntents {
    fn on_add_to_cart(&mut self, intent: &CartIntent) {
        self.carts.push(intent.clone());
    }

    fn on_add_to_waitlist(&mut self, intent: &WaitlistIntent) {
        self.waitlist.push(intent.clone());
    }
}

/// Publishes intents on an [`EventBus`] so several collaborators can react.
///
/// Publish failures are logged and dropped.
#[derive(Debug, Clone)]
pub struct BusIntentHandler<B> {
    bus: B,
}

impl<B> BusIntentHandler<B>
where
    B: EventBus<StorefrontIntent>,
{
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    fn publish(&self, intent: StorefrontIntent) {
        let event_type = intent.event_type();
        if let Err(err) = self.bus.publish(intent) {
            tracing::warn!(event_type, error = ?err, "failed to publish storefront intent");
        }
    }
}

impl<B> IntentHandler for BusIntentHandler<B>
where
    B: EventBus<StorefrontIntent>,
{
    fn on_add_to_cart(&mut self, intent: &CartIntent) {
        self.publish(StorefrontIntent::Cart(intent.clone()));
    }

    fn on_add_to_waitlist(&mut self, intent: &WaitlistIntent) {
        self.publish(StorefrontIntent::Waitlist(intent.clone()));
    }
}
