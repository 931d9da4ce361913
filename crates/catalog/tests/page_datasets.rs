use storefront_catalog::{CategoryFilter, SortKey, datasets, filter_and_sort};

fn names(products: &[storefront_catalog::Product]) -> Vec<&str> {
    products.iter().map(|p| p.name()).collect()
}

#[test]
fn watches_sorted_by_price_both_ways() {
    let watches = datasets::watches();

    let asc = filter_and_sort(&watches, &CategoryFilter::All, SortKey::PriceLowToHigh);
    assert_eq!(
        names(&asc),
        vec!["Minimalist Watch", "Smart Watch Pro", "Luxury Chronograph", "Classic Gold Watch"]
    );

    let desc = filter_and_sort(&watches, &CategoryFilter::All, SortKey::PriceHighToLow);
    assert_eq!(
        names(&desc),
        vec!["Classic Gold Watch", "Luxury Chronograph", "Smart Watch Pro", "Minimalist Watch"]
    );
}

#[test]
fn kids_chips_other_than_all_match_nothing() {
    // Kids products are all labelled "Kids"; the garment chips have no data yet.
    let kids = datasets::kids();
    for chip in ["Tops", "Bottoms", "Dresses", "Sets", "Accessories"] {
        let out = filter_and_sort(&kids, &CategoryFilter::from_label(chip), SortKey::Newest);
        assert!(out.is_empty(), "{chip} should be empty");
    }
    assert_eq!(filter_and_sort(&kids, &CategoryFilter::All, SortKey::Newest).len(), 4);
}

#[test]
fn trending_strip_filters_by_department() {
    let trending = datasets::trending();
    let women = filter_and_sort(&trending, &CategoryFilter::from_label("Women"), SortKey::PriceHighToLow);
    assert_eq!(names(&women), vec!["Designer Handbag", "Floral Summer Dress"]);
}

#[test]
fn equal_prices_keep_dataset_order() {
    // Oxford shirt and kids party dress are both $89 on the trending strip.
    let trending = datasets::trending();
    let asc = filter_and_sort(&trending, &CategoryFilter::All, SortKey::PriceLowToHigh);
    let oxford = asc.iter().position(|p| p.name() == "Classic Oxford Shirt").unwrap();
    let dress = asc.iter().position(|p| p.name() == "Kids Party Dress").unwrap();
    assert_eq!(dress, oxford + 1);
}
