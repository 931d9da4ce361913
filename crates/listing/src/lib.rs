//! Storefront listing pages: quick view lightbox, prev/next navigation,
//! cart and waitlist intents, sharing, and the page shell that ties them
//! to a filtered catalog.

pub mod config;
pub mod context;
pub mod intent;
pub mod lightbox;
pub mod listing;
pub mod navigator;
pub mod notice;
pub mod page;
pub mod share;

pub use config::StorefrontConfig;
pub use context::{AdminState, StorefrontContext};
pub use intent::{BusIntentHandler, CartIntent, IntentHandler, RecordingIntents, StorefrontIntent, WaitlistIntent};
pub use lightbox::{Lightbox, LightboxCommand, LightboxEvent, LightboxState};
pub use listing::Listing;
pub use navigator::Navigator;
pub use notice::Notice;
pub use page::{EMPTY_STATE_MESSAGE, ListingPage};
pub use share::{Clipboard, ClipboardError, MemoryClipboard, ShareLinks, ShareOutcome, ShareTarget, UnavailableClipboard};
