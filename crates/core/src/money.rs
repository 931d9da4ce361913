//! Prices as explicit amounts.
//!
//! Catalog prices are stored as an amount in minor units plus an ISO currency
//! code. The shopper-facing string (`"$89"`, `"$89.50"`) is derived on
//! display, so sorting never has to re-parse formatted text.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// ISO currency codes understood by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn symbol(self) -> char {
        match self {
            Currency::Usd => '$',
            Currency::Eur => '€',
            Currency::Gbp => '£',
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '$' => Some(Currency::Usd),
            '€' => Some(Currency::Eur),
            '£' => Some(Currency::Gbp),
            _ => None,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// A price: amount in the smallest currency unit (e.g. cents) plus currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount_minor: u64,
    currency: Currency,
}

impl Money {
    pub fn new(amount_minor: u64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Whole-unit price in US dollars (`Money::usd(89)` is `$89`).
    ///
    /// Amounts above `u64::MAX / 100` dollars saturate at `u64::MAX` cents;
    /// use [`Money::checked_usd`] to detect that.
    pub fn usd(whole: u64) -> Self {
        Self::new(whole.saturating_mul(100), Currency::Usd)
    }

    /// Like [`Money::usd`], but `None` when the amount in cents overflows.
    pub fn checked_usd(whole: u64) -> Option<Self> {
        whole.checked_mul(100).map(|cents| Self::new(cents, Currency::Usd))
    }

    pub fn amount_minor(&self) -> u64 {
        self.amount_minor
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Parse a legacy display string such as `"$89"`, `"€120.50"` or `"$1,299"`.
    ///
    /// The leading character must be a known currency symbol; at most two
    /// fractional digits are accepted.
    pub fn parse_display(text: &str) -> DomainResult<Self> {
        let text = text.trim();
        let mut chars = text.chars();
        let symbol = chars
            .next()
            .ok_or_else(|| DomainError::validation("price cannot be empty"))?;
        let currency = Currency::from_symbol(symbol)
            .ok_or_else(|| DomainError::validation(format!("unknown currency symbol in {text:?}")))?;

        let digits: String = chars.as_str().chars().filter(|c| *c != ',').collect();
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits.as_str(), ""),
        };

        let invalid = || DomainError::validation(format!("malformed price {text:?}"));

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let amount_minor = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self::new(amount_minor, currency))
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_display(s)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let whole = self.amount_minor / 100;
        let cents = self.amount_minor % 100;
        if cents == 0 {
            write!(f, "{}{}", self.currency.symbol(), whole)
        } else {
            write!(f, "{}{}.{:02}", self.currency.symbol(), whole, cents)
        }
    }
}
