use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use storefront_catalog::SortKey;
use storefront_core::SessionId;
use storefront_listing::{EMPTY_STATE_MESSAGE, IntentHandler, Listing};

use crate::args::{Cli, GridArgs};
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct Card {
    pub index: usize,
    pub id: u32,
    pub name: String,
    pub price: String,
    pub category: String,
    pub in_stock: bool,
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct GridOut {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub hero_image: Option<String>,
    pub categories: Vec<String>,
    pub category: String,
    pub sort_options: Vec<SortKey>,
    pub sort: SortKey,
    pub products: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl GridOut {
    pub fn from_listing<H: IntentHandler>(listing: &Listing<H>) -> Self {
        let page = listing.page();
        let products = listing
            .products()
            .iter()
            .enumerate()
            .map(|(index, product)| Card {
                index,
                id: product.id_typed().get(),
                name: product.name().to_string(),
                price: product.display_price(),
                category: product.category().to_string(),
                in_stock: product.in_stock(),
                image: product.image().to_string(),
            })
            .collect();

        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            tagline: page.tagline.clone(),
            hero_image: page.hero_image.clone(),
            categories: page.categories.clone(),
            category: listing.category().label().to_string(),
            sort_options: page.sort_options.clone(),
            sort: listing.sort(),
            products,
            empty_message: listing.is_empty().then_some(EMPTY_STATE_MESSAGE),
        }
    }
}

impl Render for GridOut {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.title)?;
        if !self.tagline.is_empty() {
            writeln!(out, "{}", self.tagline)?;
        }
        if self.categories.len() > 1 {
            let chips: Vec<String> = self
                .categories
                .iter()
                .map(|c| if *c == self.category { format!("[{c}]") } else { c.clone() })
                .collect();
            writeln!(out, "Filters: {}", chips.join(" "))?;
        }
        writeln!(out, "Sort: {}", self.sort)?;
        writeln!(out)?;

        if let Some(message) = self.empty_message {
            writeln!(out, "{message}")?;
            return Ok(());
        }
        for card in &self.products {
            let stock = if card.in_stock { "" } else { "  (out of stock)" };
            writeln!(
                out,
                "{:>3}  {:<28} {:>7}  {}{stock}",
                card.index, card.name, card.price, card.category
            )?;
        }
        Ok(())
    }
}

pub fn run(cli: &Cli, slug: &str, grid: &GridArgs, out: &mut dyn Write) -> Result<()> {
    let listing = super::open_listing(cli, slug, grid, SessionId::new())?;
    output::print(cli.json, &GridOut::from_listing(&listing), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_listing::{ListingPage, RecordingIntents};

    fn render(grid: &GridOut) -> String {
        let mut text = Vec::new();
        grid.render_text(&mut text).unwrap();
        String::from_utf8(text).unwrap()
    }

    #[test]
    fn grid_marks_out_of_stock_products() {
        let page = ListingPage::find("mens-jackets").unwrap();
        let listing = Listing::new(page, RecordingIntents::new());
        let grid = GridOut::from_listing(&listing);

        assert_eq!(grid.products.len(), 4);
        let text = render(&grid);
        assert!(text.starts_with("Men's Jackets\nStay stylish in any weather\n"));
        assert!(text.contains("Raincoat"));
        assert!(text.contains("(out of stock)"));
        assert!(text.contains("$179"));
    }

    #[test]
    fn empty_category_renders_the_empty_state() {
        let page = ListingPage::find("kids").unwrap();
        let mut listing = Listing::new(page, RecordingIntents::new());
        listing.select_category("Dresses").unwrap();
        let grid = GridOut::from_listing(&listing);

        assert_eq!(grid.empty_message, Some(EMPTY_STATE_MESSAGE));
        let text = render(&grid);
        assert!(text.contains("Filters: All Tops Bottoms [Dresses] Sets Accessories"));
        assert!(text.trim_end().ends_with(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn json_uses_sort_keys() {
        let page = ListingPage::find("watches").unwrap();
        let mut listing = Listing::new(page, RecordingIntents::new());
        listing.select_sort(SortKey::PriceHighToLow).unwrap();
        let json = serde_json::to_value(GridOut::from_listing(&listing)).unwrap();

        assert_eq!(json["sort"], "price-desc");
        assert_eq!(json["products"][0]["name"], "Classic Gold Watch");
        assert!(json.get("empty_message").is_none());
    }
}
