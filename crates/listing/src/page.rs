//! Listing page capability sets.
//!
//! Every storefront page is the same listing with different copy, chips,
//! sort options and dataset.

use serde::Serialize;

use storefront_catalog::{CategoryFilter, Product, SortKey, datasets};

const UNSPLASH: &str = "https://images.unsplash.com/";
const HERO_PARAMS: &str = "?auto=format&fit=crop&w=2000&q=80";

/// Shown in place of the grid when the filtered sequence is empty.
pub const EMPTY_STATE_MESSAGE: &str = "No products found in this category.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPage {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub hero_image: Option<String>,
    /// Category chips, `"All"` first.
    pub categories: Vec<String>,
    pub sort_options: Vec<SortKey>,
    #[serde(skip)]
    pub products: Vec<Product>,
}

impl ListingPage {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            tagline: String::new(),
            hero_image: None,
            categories: vec![CategoryFilter::ALL_LABEL.to_string()],
            sort_options: SortKey::ALL.to_vec(),
            products: Vec::new(),
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_hero(mut self, photo: &str) -> Self {
        self.hero_image = Some(format!("{UNSPLASH}{photo}{HERO_PARAMS}"));
        self
    }

    /// Replace the chips. `"All"` is always kept as the first chip.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = std::iter::once(CategoryFilter::ALL_LABEL.to_string())
            .chain(
                categories
                    .into_iter()
                    .map(Into::into)
                    .filter(|c| c != CategoryFilter::ALL_LABEL),
            )
            .collect();
        self
    }

    pub fn with_sort_options(mut self, options: impl Into<Vec<SortKey>>) -> Self {
        self.sort_options = options.into();
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Whether the page shows any chip besides `"All"`.
    pub fn has_filters(&self) -> bool {
        self.categories.len() > 1
    }

    pub fn offers_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// Every built-in page, in navigation order.
    pub fn builtin() -> Vec<ListingPage> {
        vec![
            trending(),
            kids(),
            watches(),
            mens_jackets(),
            mens_pants(),
            mens_shirts(),
        ]
    }

    pub fn find(slug: &str) -> Option<ListingPage> {
        Self::builtin().into_iter().find(|page| page.slug == slug)
    }
}

fn trending() -> ListingPage {
    ListingPage::new("trending", "Trending Products")
        .with_sort_options([SortKey::Newest])
        .with_products(datasets::trending())
}

fn kids() -> ListingPage {
    ListingPage::new("kids", "Kids Collection")
        .with_tagline("Fun and comfortable styles for little ones")
        .with_hero("photo-1514090458221-65bb69cf63e6")
        .with_categories(["Tops", "Bottoms", "Dresses", "Sets", "Accessories"])
        .with_products(datasets::kids())
}

fn watches() -> ListingPage {
    ListingPage::new("watches", "Luxury Watches")
        .with_tagline("Timeless elegance for every occasion")
        .with_hero("photo-1523170335258-f5ed11844a49")
        .with_categories(["Luxury", "Smart", "Classic", "Sport"])
        .with_products(datasets::watches())
}

fn mens_jackets() -> ListingPage {
    ListingPage::new("mens-jackets", "Men's Jackets")
        .with_tagline("Stay stylish in any weather")
        .with_hero("photo-1591047139829-d91aecb6caea")
        .with_categories(["Jackets"])
        .with_products(datasets::mens_jackets())
}

fn mens_pants() -> ListingPage {
    ListingPage::new("mens-pants", "Men's Pants")
        .with_tagline("From casual to formal, find your perfect fit")
        .with_hero("photo-1489987707025-afc232f7ea0f")
        .with_categories(["Pants"])
        .with_products(datasets::mens_pants())
}

fn mens_shirts() -> ListingPage {
    ListingPage::new("mens-shirts", "Men's Shirts")
        .with_tagline("Classic and contemporary shirts for every occasion")
        .with_hero("photo-1603252109303-2751441dd157")
        .with_categories(["Shirts"])
        .with_products(datasets::mens_shirts())
}
