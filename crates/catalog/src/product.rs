use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, Money};

/// Sizes offered when a record does not list its own.
pub const DEFAULT_SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

/// Product identifier.
///
/// Unique within one catalog (one listing page), not globally: the kids page
/// and the watches page both have a product 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    image: String,
    category: String,
    description: String,
    sizes: Vec<String>,
    in_stock: bool,
}

impl Product {
    /// Build a product with the default size run, in stock, and no image or
    /// description. Use the `with_*` methods to fill in the rest.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: String::new(),
            category: category.into(),
            description: String::new(),
            sizes: DEFAULT_SIZES.iter().map(|s| s.to_string()).collect(),
            in_stock: true,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the size run. An empty list keeps the defaults.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sizes: Vec<String> = sizes.into_iter().map(Into::into).collect();
        if !sizes.is_empty() {
            self.sizes = sizes;
        }
        self
    }

    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Shopper-facing price string, e.g. `"$89"`.
    pub fn display_price(&self) -> String {
        self.price.to_string()
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Whether the product can go in the cart. Out-of-stock products only
    /// offer the waitlist.
    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Price as it appears in a product record: a legacy display string or an
/// explicit amount.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Display(String),
    Amount(Money),
}

impl PriceInput {
    pub fn into_money(self) -> DomainResult<Money> {
        match self {
            PriceInput::Display(text) => Money::parse_display(&text),
            PriceInput::Amount(money) => Ok(money),
        }
    }
}

/// A product record as supplied by a collaborator (JSON dataset, fixtures).
///
/// Field names follow the storefront's data files (`inStock`). Missing
/// optional fields pick up the documented defaults in [`Product::from_record`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    pub price: PriceInput,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sizes: Option<Vec<String>>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

impl Product {
    /// Validate a record and apply defaults (`sizes` → `XS..XL`, `inStock` → true).
    pub fn from_record(record: ProductRecord) -> DomainResult<Self> {
        if record.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                record.id
            )));
        }

        if record
            .sizes
            .as_ref()
            .is_some_and(|sizes| sizes.iter().any(|s| s.trim().is_empty()))
        {
            return Err(DomainError::validation(format!(
                "product {}: sizes cannot contain blank entries",
                record.id
            )));
        }

        let price = record.price.into_money()?;

        Ok(Product::new(ProductId(record.id), record.name, price, record.category)
            .with_image(record.image)
            .with_description(record.description)
            .with_sizes(record.sizes.unwrap_or_default())
            .with_stock(record.in_stock.unwrap_or(true)))
    }
}
