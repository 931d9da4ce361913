//! Per-session context passed explicitly to the listings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use storefront_core::{DomainError, DomainResult, SessionId};

use crate::config::StorefrontConfig;

/// Whether the visitor has signed in to the admin area.
///
/// Informational only: nothing in the storefront is gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdminState {
    #[default]
    SignedOut,
    SignedIn { since: DateTime<Utc> },
}

/// Everything a listing needs to know about the browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontContext {
    session_id: SessionId,
    base_url: Url,
    admin: AdminState,
}

impl StorefrontContext {
    pub fn new(session_id: SessionId, config: &StorefrontConfig) -> DomainResult<Self> {
        Ok(Self {
            session_id,
            base_url: config.base_url()?,
            admin: AdminState::SignedOut,
        })
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a page path (`""` is the home page).
    pub fn page_url(&self, path: &str) -> DomainResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| DomainError::validation(format!("page path {path:?}: {e}")))
    }

    pub fn admin(&self) -> AdminState {
        self.admin
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.admin, AdminState::SignedIn { .. })
    }

    pub fn sign_in(&mut self, at: DateTime<Utc>) {
        if !self.is_admin() {
            tracing::info!(session = %self.session_id, "admin signed in");
            self.admin = AdminState::SignedIn { since: at };
        }
    }

    pub fn sign_out(&mut self) {
        if self.is_admin() {
            tracing::info!(session = %self.session_id, "admin signed out");
        }
        self.admin = AdminState::SignedOut;
    }
}
