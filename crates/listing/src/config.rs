//! Storefront configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use storefront_core::{DomainError, DomainResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/";

/// Environment variable overriding [`StorefrontConfig::base_url`].
pub const BASE_URL_VAR: &str = "STOREFRONT_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Root that listing page paths are resolved against for share links.
    pub base_url: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }
        config.base_url()?;
        Ok(config)
    }

    /// The base URL, parsed and normalised to end in `/` so page paths join
    /// underneath it rather than replacing its last segment.
    pub fn base_url(&self) -> DomainResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DomainError::validation(format!("{BASE_URL_VAR}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(DomainError::validation(format!(
                "{BASE_URL_VAR}: {} cannot be used as a base URL",
                self.base_url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
