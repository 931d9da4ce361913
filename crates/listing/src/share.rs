//! Share targets for the quick view.
//!
//! Two targets open a share dialog on a social network (a URL the embedding
//! shell opens in a new window); the third copies the page URL through a
//! [`Clipboard`]. Only the copy can fail observably.

use serde::Serialize;
use thiserror::Error;
use url::Url;

use storefront_catalog::Product;
use storefront_core::{DomainError, DomainResult};

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShareTarget {
    Facebook,
    Twitter,
    CopyLink,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [ShareTarget::Facebook, ShareTarget::Twitter, ShareTarget::CopyLink];

    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Facebook => "Share on Facebook",
            ShareTarget::Twitter => "Share on Twitter",
            ShareTarget::CopyLink => "Copy Link",
        }
    }
}

/// What happened when a share target was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The shell should open this URL in a new window.
    Opened(Url),
    Copied,
    CopyFailed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("clipboard write rejected: {0}")]
pub struct ClipboardError(pub String);

/// Write access to the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard kept in memory; every write succeeds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard for environments without one (headless shells); every write fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("no clipboard available".to_string()))
    }
}

/// Text posted alongside the link: `Check out <name> - <description>`.
pub fn share_summary(product: &Product) -> String {
    format!("Check out {} - {}", product.name(), product.description())
}

/// Deep link for the social targets; `None` for [`ShareTarget::CopyLink`].
pub fn share_link(target: ShareTarget, product: &Product, page_url: &Url) -> DomainResult<Option<Url>> {
    let link = match target {
        ShareTarget::Facebook => Url::parse_with_params(FACEBOOK_SHARER, &[("u", page_url.as_str())]),
        ShareTarget::Twitter => Url::parse_with_params(
            TWITTER_INTENT,
            &[("text", share_summary(product).as_str()), ("url", page_url.as_str())],
        ),
        ShareTarget::CopyLink => return Ok(None),
    };
    link.map(Some)
        .map_err(|e| DomainError::invariant(format!("share link for {target:?}: {e}")))
}

/// Carry out a share. Clipboard failures become [`ShareOutcome::CopyFailed`].
pub fn share(
    target: ShareTarget,
    product: &Product,
    page_url: &Url,
    clipboard: &mut dyn Clipboard,
) -> DomainResult<ShareOutcome> {
    if let Some(link) = share_link(target, product, page_url)? {
        return Ok(ShareOutcome::Opened(link));
    }

    match clipboard.write_text(page_url.as_str()) {
        Ok(()) => Ok(ShareOutcome::Copied),
        Err(err) => {
            tracing::warn!(error = %err, "copy link failed");
            Ok(ShareOutcome::CopyFailed)
        }
    }
}

/// All share destinations for one product, for shells that render the menu
/// up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub page: Url,
    pub facebook: Url,
    pub twitter: Url,
}

impl ShareLinks {
    pub fn for_product(product: &Product, page_url: &Url) -> DomainResult<Self> {
        let missing = || DomainError::invariant("social share target produced no link");
        Ok(Self {
            page: page_url.clone(),
            facebook: share_link(ShareTarget::Facebook, product, page_url)?.ok_or_else(missing)?,
            twitter: share_link(ShareTarget::Twitter, product, page_url)?.ok_or_else(missing)?,
        })
    }
}
