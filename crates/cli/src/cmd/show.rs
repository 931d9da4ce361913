use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use storefront_catalog::Product;
use storefront_listing::{
    CartIntent, Lightbox, LightboxState, Listing, RecordingIntents, ShareLinks, StorefrontContext,
    WaitlistIntent,
};

use crate::args::{Cli, GridArgs, QuickViewArgs};
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct QuickViewOut {
    pub page: String,
    pub index: usize,
    pub shown: usize,
    pub product: Product,
    pub state: LightboxState,
    pub selected_size: Option<String>,
    pub actions: Vec<&'static str>,
    pub navigation_enabled: bool,
    pub notice: Option<&'static str>,
    pub share: ShareLinks,
    pub carts: Vec<CartIntent>,
    pub waitlist: Vec<WaitlistIntent>,
}

impl QuickViewOut {
    pub fn from_listing(listing: &Listing<RecordingIntents>, context: &StorefrontContext) -> Result<Self> {
        let lightbox = listing.lightbox();
        let product = lightbox.product().cloned().context("quick view is closed")?;
        let page_url = context.page_url(&listing.page().slug)?;

        Ok(Self {
            page: listing.page().slug.clone(),
            index: listing.navigator().index(),
            shown: listing.products().len(),
            share: ShareLinks::for_product(&product, &page_url)?,
            product,
            state: lightbox.state(),
            selected_size: lightbox.selected_size().map(str::to_string),
            actions: available_actions(lightbox),
            navigation_enabled: listing.navigation_enabled(),
            notice: lightbox.notice().map(|n| n.message()),
            carts: listing.handler().carts.clone(),
            waitlist: listing.handler().waitlist.clone(),
        })
    }
}

fn available_actions(lightbox: &Lightbox) -> Vec<&'static str> {
    match lightbox.state() {
        LightboxState::Hidden => Vec::new(),
        LightboxState::Viewing if lightbox.can_add_to_cart() => vec!["Add to Cart", "Notify Me", "Share"],
        LightboxState::Viewing => vec!["Join Waitlist", "Share"],
        LightboxState::WaitlistForm => vec!["Submit", "Cancel", "Share"],
    }
}

impl Render for QuickViewOut {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        let product = &self.product;
        writeln!(out, "{}  {}", product.name(), product.display_price())?;
        let stock = if product.in_stock() { "In stock" } else { "Out of stock" };
        writeln!(out, "{} - {stock}", product.category())?;
        if !product.description().is_empty() {
            writeln!(out, "{}", product.description())?;
        }

        let sizes: Vec<String> = product
            .sizes()
            .iter()
            .map(|s| {
                if self.selected_size.as_deref() == Some(s.as_str()) {
                    format!("[{s}]")
                } else {
                    s.clone()
                }
            })
            .collect();
        writeln!(out, "Sizes: {}", sizes.join(" "))?;
        writeln!(out, "Actions: {}", self.actions.join(", "))?;
        if self.navigation_enabled {
            writeln!(out, "Product {} of {} (prev/next)", self.index + 1, self.shown)?;
        }
        if let Some(notice) = self.notice {
            writeln!(out, "Notice: {notice}")?;
        }

        writeln!(out, "Share:")?;
        writeln!(out, "  Facebook   {}", self.share.facebook)?;
        writeln!(out, "  Twitter    {}", self.share.twitter)?;
        writeln!(out, "  Copy Link  {}", self.share.page)?;

        for intent in &self.carts {
            writeln!(out, "Cart: {} ({})", intent.product.name(), intent.size)?;
        }
        for intent in &self.waitlist {
            writeln!(out, "Waitlist: {} ({}) for {}", intent.product.name(), intent.size, intent.email)?;
        }
        Ok(())
    }
}

fn apply_actions(listing: &mut Listing<RecordingIntents>, actions: &QuickViewArgs) -> Result<()> {
    for _ in 0..actions.next {
        listing.next()?;
    }
    for _ in 0..actions.previous {
        listing.previous()?;
    }
    if let Some(size) = &actions.size {
        listing.select_size(size).context("--size")?;
    }
    if actions.cart {
        listing.add_to_cart().context("--cart")?;
    }
    if let Some(email) = &actions.waitlist {
        listing.open_waitlist().context("--waitlist")?;
        listing.enter_email(email)?;
        listing.submit_waitlist()?;
    }
    Ok(())
}

pub fn run(
    cli: &Cli,
    slug: &str,
    index: usize,
    grid: &GridArgs,
    actions: &QuickViewArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let context = super::context(cli)?;
    let mut listing = super::open_listing(cli, slug, grid, context.session_id())?;
    listing.quick_view(index).with_context(|| {
        format!("no product at position {index} of {slug} ({} shown)", listing.products().len())
    })?;
    apply_actions(&mut listing, actions)?;

    output::print(cli.json, &QuickViewOut::from_listing(&listing, &context)?, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::SessionId;
    use storefront_listing::{ListingPage, StorefrontConfig};

    fn context() -> StorefrontContext {
        StorefrontContext::new(SessionId::new(), &StorefrontConfig::default()).unwrap()
    }

    fn jackets() -> Listing<RecordingIntents> {
        Listing::new(ListingPage::find("mens-jackets").unwrap(), RecordingIntents::new())
    }

    fn render(view: &QuickViewOut) -> String {
        let mut text = Vec::new();
        view.render_text(&mut text).unwrap();
        String::from_utf8(text).unwrap()
    }

    #[test]
    fn out_of_stock_product_offers_the_waitlist() {
        let mut listing = jackets();
        listing.quick_view(3).unwrap();
        let view = QuickViewOut::from_listing(&listing, &context()).unwrap();

        assert_eq!(view.actions, vec!["Join Waitlist", "Share"]);
        let text = render(&view);
        assert!(text.starts_with("Raincoat  $179\nJackets - Out of stock\n"));
        assert!(text.contains("Product 4 of 4"));
        assert!(text.contains("Copy Link  http://localhost:5173/mens-jackets"));
    }

    #[test]
    fn in_stock_product_offers_cart_and_notify_me() {
        let mut listing = jackets();
        listing.quick_view(0).unwrap();
        let view = QuickViewOut::from_listing(&listing, &context()).unwrap();
        assert_eq!(view.actions, vec!["Add to Cart", "Notify Me", "Share"]);
        assert!(render(&view).contains("Actions: Add to Cart, Notify Me, Share"));
    }

    #[test]
    fn notify_me_on_in_stock_product_joins_the_waitlist() {
        let mut listing = jackets();
        listing.quick_view(1).unwrap();
        let actions = QuickViewArgs {
            size: Some("S".into()),
            waitlist: Some("a@b.com".into()),
            ..QuickViewArgs::default()
        };
        apply_actions(&mut listing, &actions).unwrap();
        let view = QuickViewOut::from_listing(&listing, &context()).unwrap();
        assert_eq!(view.waitlist.len(), 1);
        assert_eq!(view.waitlist[0].product.name(), "Denim Jacket");
    }

    #[test]
    fn waitlist_action_records_the_intent() {
        let mut listing = jackets();
        listing.quick_view(3).unwrap();
        let actions = QuickViewArgs {
            size: Some("M".into()),
            waitlist: Some("a@b.com".into()),
            ..QuickViewArgs::default()
        };
        apply_actions(&mut listing, &actions).unwrap();

        let view = QuickViewOut::from_listing(&listing, &context()).unwrap();
        assert_eq!(view.waitlist.len(), 1);
        assert_eq!(view.notice, Some("Added to waitlist successfully!"));
        assert_eq!(view.state, LightboxState::Viewing);
        assert!(render(&view).contains("Waitlist: Raincoat (M) for a@b.com"));
    }

    #[test]
    fn cart_on_out_of_stock_product_is_an_error() {
        let mut listing = jackets();
        listing.quick_view(3).unwrap();
        let actions = QuickViewArgs {
            size: Some("M".into()),
            cart: true,
            ..QuickViewArgs::default()
        };
        let err = apply_actions(&mut listing, &actions).unwrap_err();
        assert!(format!("{err:#}").contains("out of stock"));
    }

    #[test]
    fn stepping_moves_the_quick_view() {
        let mut listing = jackets();
        listing.quick_view(0).unwrap();
        let actions = QuickViewArgs {
            previous: 1,
            size: Some("L".into()),
            ..QuickViewArgs::default()
        };
        apply_actions(&mut listing, &actions).unwrap();

        let view = QuickViewOut::from_listing(&listing, &context()).unwrap();
        assert_eq!(view.product.name(), "Raincoat");
        assert_eq!(view.selected_size.as_deref(), Some("L"));
        assert!(render(&view).contains("Sizes: M [L] XL"));
    }

    #[test]
    fn json_carries_the_share_links() {
        let mut listing = jackets();
        listing.quick_view(1).unwrap();
        let view = QuickViewOut::from_listing(&listing, &context()).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["product"]["name"], "Denim Jacket");
        assert_eq!(json["state"], "viewing");
        assert_eq!(json["share"]["page"], "http://localhost:5173/mens-jackets");
    }
}
