//! Filter/sort engine: (dataset, category, sort key) → displayed sequence.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

use crate::product::Product;

/// Category chip selection. The `"All"` chip matches every product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Interpret a chip label. Labels are matched exactly; an unknown label is
    /// a valid filter that simply matches nothing.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(label) => label,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category() == category,
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort options offered by listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Dataset order.
    #[default]
    Newest,
    #[serde(rename = "price-asc")]
    PriceLowToHigh,
    #[serde(rename = "price-desc")]
    PriceHighToLow,
    /// No popularity signal exists yet; keeps dataset order like `Newest`.
    Popular,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
        SortKey::Popular,
    ];

    /// Label shown in the sort dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
            SortKey::Popular => "Popular",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLowToHigh => "price-asc",
            SortKey::PriceHighToLow => "price-desc",
            SortKey::Popular => "popular",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    /// Accepts either the dropdown label or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.label() == s || key.slug() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort option {s:?}")))
    }
}

/// Derive the displayed sequence.
///
/// Works on a copy: `dataset` is never reordered. Sorting is stable, so
/// products with equal prices keep their dataset order.
pub fn filter_and_sort(dataset: &[Product], category: &CategoryFilter, sort: SortKey) -> Vec<Product> {
    let mut filtered: Vec<Product> = dataset
        .iter()
        .filter(|product| category.matches(product))
        .cloned()
        .collect();

    match sort {
        SortKey::PriceLowToHigh => filtered.sort_by_key(|p| p.price().amount_minor()),
        SortKey::PriceHighToLow => {
            filtered.sort_by(|a, b| b.price().amount_minor().cmp(&a.price().amount_minor()))
        }
        SortKey::Newest | SortKey::Popular => {}
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;
    use storefront_core::Money;

    fn product(id: u32, price: u64, category: &str) -> Product {
        Product::new(ProductId(id), format!("Product {id}"), Money::usd(price), category)
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id_typed().get()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, 299, "Jackets"),
            product(2, 149, "Jackets"),
            product(3, 249, "Blazers"),
            product(4, 149, "Jackets"),
        ]
    }

    #[test]
    fn newest_keeps_dataset_order() {
        let out = filter_and_sort(&sample(), &CategoryFilter::All, SortKey::Newest);
        assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn popular_behaves_like_newest() {
        let data = sample();
        assert_eq!(
            filter_and_sort(&data, &CategoryFilter::All, SortKey::Popular),
            filter_and_sort(&data, &CategoryFilter::All, SortKey::Newest)
        );
    }

    #[test]
    fn price_sorts_are_stable_on_ties() {
        let data = sample();
        let asc = filter_and_sort(&data, &CategoryFilter::All, SortKey::PriceLowToHigh);
        assert_eq!(ids(&asc), vec![2, 4, 3, 1]);

        let desc = filter_and_sort(&data, &CategoryFilter::All, SortKey::PriceHighToLow);
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn category_filter_keeps_matching_products_only() {
        let out = filter_and_sort(
            &sample(),
            &CategoryFilter::from_label("Jackets"),
            SortKey::PriceLowToHigh,
        );
        assert_eq!(ids(&out), vec![2, 4, 1]);
    }

    #[test]
    fn unknown_category_yields_empty_sequence() {
        let out = filter_and_sort(&sample(), &CategoryFilter::from_label("Tops"), SortKey::Newest);
        assert!(out.is_empty());
    }

    #[test]
    fn source_dataset_is_not_reordered() {
        let data = sample();
        let before = data.clone();
        let _ = filter_and_sort(&data, &CategoryFilter::All, SortKey::PriceHighToLow);
        assert_eq!(data, before);
    }

    #[test]
    fn all_label_is_the_wildcard() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("all"), CategoryFilter::Only("all".into()));
        assert_eq!(CategoryFilter::All.to_string(), "All");
    }

    #[test]
    fn sort_key_parses_labels_and_slugs() {
        assert_eq!("Price: Low to High".parse::<SortKey>().unwrap(), SortKey::PriceLowToHigh);
        assert_eq!("price-desc".parse::<SortKey>().unwrap(), SortKey::PriceHighToLow);
        assert_eq!("Popular".parse::<SortKey>().unwrap(), SortKey::Popular);
        assert!(matches!("Cheapest".parse::<SortKey>(), Err(DomainError::Validation(_))));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const CATEGORIES: [&str; 3] = ["Tops", "Bottoms", "Sets"];

        fn dataset() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec((0u64..1_000, 0usize..CATEGORIES.len()), 0..24).prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (price, cat))| product(i as u32 + 1, price, CATEGORIES[cat]))
                    .collect()
            })
        }

        fn filter() -> impl Strategy<Value = CategoryFilter> {
            prop_oneof![
                Just(CategoryFilter::All),
                Just(CategoryFilter::from_label("Tops")),
                Just(CategoryFilter::from_label("Sets")),
                Just(CategoryFilter::from_label("Accessories")),
            ]
        }

        fn sort_key() -> impl Strategy<Value = SortKey> {
            prop::sample::select(SortKey::ALL.to_vec())
        }

        proptest! {
            /// Property: "All" + Newest is the identity.
            #[test]
            fn all_newest_preserves_order_and_length(data in dataset()) {
                let out = filter_and_sort(&data, &CategoryFilter::All, SortKey::Newest);
                prop_assert_eq!(out, data);
            }

            /// Property: every element satisfies the predicate and none are lost.
            #[test]
            fn result_is_exactly_the_matching_subset(
                data in dataset(),
                category in filter(),
                sort in sort_key(),
            ) {
                let out = filter_and_sort(&data, &category, sort);
                prop_assert!(out.iter().all(|p| category.matches(p)));
                prop_assert_eq!(out.len(), data.iter().filter(|p| category.matches(p)).count());

                let mut expected = ids(&data.iter().filter(|p| category.matches(p)).cloned().collect::<Vec<_>>());
                let mut actual = ids(&out);
                expected.sort_unstable();
                actual.sort_unstable();
                prop_assert_eq!(actual, expected);
            }

            /// Property: low-to-high is non-decreasing, high-to-low non-increasing.
            #[test]
            fn price_orders_are_monotonic(data in dataset(), category in filter()) {
                let asc = filter_and_sort(&data, &category, SortKey::PriceLowToHigh);
                prop_assert!(asc.windows(2).all(|w| w[0].price().amount_minor() <= w[1].price().amount_minor()));

                let desc = filter_and_sort(&data, &category, SortKey::PriceHighToLow);
                prop_assert!(desc.windows(2).all(|w| w[0].price().amount_minor() >= w[1].price().amount_minor()));
            }
        }
    }
}
