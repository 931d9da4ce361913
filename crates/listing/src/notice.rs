//! Messages shown in the quick view's single notification slot.

use serde::Serialize;

/// A notification. The slot holds at most one; a new notice replaces the
/// current one instead of queueing behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notice {
    SizeRequired,
    EmailRequired,
    AddedToCart,
    AddedToWaitlist,
    LinkCopied,
    CopyFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::SizeRequired => "Please select a size",
            Notice::EmailRequired => "Please enter your email",
            Notice::AddedToCart => "Added to cart successfully!",
            Notice::AddedToWaitlist => "Added to waitlist successfully!",
            Notice::LinkCopied => "Link copied to clipboard!",
            Notice::CopyFailed => "Failed to copy link",
        }
    }

    /// Whether the notice reports something the shopper has to fix or retry.
    pub fn is_problem(self) -> bool {
        matches!(self, Notice::SizeRequired | Notice::EmailRequired | Notice::CopyFailed)
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
