//! The listing page shell.
//!
//! Owns the filtered sequence, the navigator and the lightbox for one page,
//! and forwards intents raised by the lightbox to an [`IntentHandler`].

use chrono::Utc;

use storefront_catalog::{CategoryFilter, Product, SortKey, filter_and_sort};
use storefront_core::{AggregateRoot, DomainError, DomainResult, SessionId};
use storefront_events::execute;

use crate::context::StorefrontContext;
use crate::intent::IntentHandler;
use crate::lightbox::{Lightbox, LightboxCommand, LightboxEvent};
use crate::navigator::Navigator;
use crate::page::ListingPage;
use crate::share::{self, Clipboard, ShareOutcome, ShareTarget};

#[derive(Debug)]
pub struct Listing<H> {
    page: ListingPage,
    category: CategoryFilter,
    sort: SortKey,
    sequence: Vec<Product>,
    navigator: Navigator,
    lightbox: Lightbox,
    filters_open: bool,
    handler: H,
}

impl<H> Listing<H>
where
    H: IntentHandler,
{
    pub fn new(page: ListingPage, handler: H) -> Self {
        Self::with_session(page, SessionId::new(), handler)
    }

    pub fn with_session(page: ListingPage, session_id: SessionId, handler: H) -> Self {
        let category = CategoryFilter::All;
        let sort = SortKey::default();
        let sequence = filter_and_sort(&page.products, &category, sort);
        Self {
            page,
            category,
            sort,
            sequence,
            navigator: Navigator::new(),
            lightbox: Lightbox::new(session_id),
            filters_open: false,
            handler,
        }
    }

    pub fn page(&self) -> &ListingPage {
        &self.page
    }

    /// The filtered sequence currently shown.
    pub fn products(&self) -> &[Product] {
        &self.sequence
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn filters_open(&self) -> bool {
        self.filters_open
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Apply a category chip. Labels the page does not offer simply match
    /// nothing. An open quick view is closed because its index no longer
    /// refers to the shown sequence.
    pub fn select_category(&mut self, label: &str) -> DomainResult<()> {
        self.category = CategoryFilter::from_label(label);
        self.refresh()
    }

    /// Apply a sort option. Only the page's own sort options are accepted.
    pub fn select_sort(&mut self, sort: SortKey) -> DomainResult<()> {
        if !self.page.sort_options.contains(&sort) {
            return Err(DomainError::validation(format!(
                "sort {:?} is not offered on {}",
                sort.slug(),
                self.page.slug
            )));
        }
        self.sort = sort;
        self.refresh()
    }

    pub fn toggle_filters(&mut self) -> bool {
        self.filters_open = !self.filters_open;
        self.filters_open
    }

    /// Open the quick view on the product at `index` in the shown sequence.
    pub fn quick_view(&mut self, index: usize) -> DomainResult<()> {
        let Some(product) = self.sequence.get(index).cloned() else {
            tracing::debug!(page = %self.page.slug, index, shown = self.sequence.len(), "quick view out of range");
            return Err(DomainError::not_found());
        };
        self.navigator.open(product.clone(), index);
        self.run(LightboxCommand::Present(Some(product)))
    }

    pub fn navigation_enabled(&self) -> bool {
        self.sequence.len() > 1
    }

    /// Show the next product, wrapping at the end. Returns whether it moved.
    pub fn next(&mut self) -> DomainResult<bool> {
        if !self.navigator.next(&self.sequence) {
            return Ok(false);
        }
        self.present_current()?;
        Ok(true)
    }

    /// Show the previous product, wrapping at the start.
    pub fn previous(&mut self) -> DomainResult<bool> {
        if !self.navigator.previous(&self.sequence) {
            return Ok(false);
        }
        self.present_current()?;
        Ok(true)
    }

    pub fn close(&mut self) -> DomainResult<()> {
        self.dispatch(LightboxCommand::Close)
    }

    /// Run a lightbox command, hand any raised intent to the handler and
    /// keep the navigator in step with the lightbox.
    ///
    /// Products are shown through [`Listing::quick_view`], `next` and
    /// `previous` only; `Present(Some(_))` is rejected here so the lightbox
    /// and the navigator always agree on the product.
    pub fn dispatch(&mut self, command: LightboxCommand) -> DomainResult<()> {
        if matches!(command, LightboxCommand::Present(Some(_))) {
            return Err(DomainError::invariant(
                "products are presented through quick_view, next or previous",
            ));
        }
        self.run(command)
    }

    fn run(&mut self, command: LightboxCommand) -> DomainResult<()> {
        let events = execute(&mut self.lightbox, &command)?;
        for event in &events {
            tracing::debug!(
                page = %self.page.slug,
                session = %self.lightbox.id(),
                event = event.name(),
                "lightbox event"
            );
            match event {
                LightboxEvent::CartRequested(intent) => {
                    tracing::info!(
                        page = %self.page.slug,
                        product = %intent.product.id_typed(),
                        size = %intent.size,
                        "add to cart requested"
                    );
                    self.handler.on_add_to_cart(intent);
                }
                LightboxEvent::WaitlistRequested(intent) => {
                    tracing::info!(
                        page = %self.page.slug,
                        product = %intent.product.id_typed(),
                        size = %intent.size,
                        "waitlist requested"
                    );
                    self.handler.on_add_to_waitlist(intent);
                }
                LightboxEvent::Closed => self.navigator.close(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn select_size(&mut self, size: &str) -> DomainResult<()> {
        self.dispatch(LightboxCommand::SelectSize(size.to_string()))
    }

    pub fn add_to_cart(&mut self) -> DomainResult<()> {
        self.dispatch(LightboxCommand::AddToCart { at: Utc::now() })
    }

    pub fn open_waitlist(&mut self) -> DomainResult<()> {
        self.dispatch(LightboxCommand::OpenWaitlistForm)
    }

    pub fn enter_email(&mut self, email: &str) -> DomainResult<()> {
        self.dispatch(LightboxCommand::EditEmail(email.to_string()))
    }

    pub fn submit_waitlist(&mut self) -> DomainResult<()> {
        self.dispatch(LightboxCommand::SubmitWaitlist { at: Utc::now() })
    }

    pub fn toggle_share_menu(&mut self) -> DomainResult<()> {
        self.dispatch(LightboxCommand::ToggleShareMenu)
    }

    /// Share the product in the quick view. The page URL comes from
    /// `context`; the lightbox records the outcome in its notice slot.
    pub fn share(
        &mut self,
        target: ShareTarget,
        context: &StorefrontContext,
        clipboard: &mut dyn Clipboard,
    ) -> DomainResult<ShareOutcome> {
        let product = self
            .lightbox
            .product()
            .cloned()
            .ok_or_else(|| DomainError::invariant("lightbox is hidden"))?;
        let page_url = context.page_url(&self.page.slug)?;
        let outcome = share::share(target, &product, &page_url, clipboard)?;
        self.dispatch(LightboxCommand::CompleteShare(outcome.clone()))?;
        Ok(outcome)
    }

    fn present_current(&mut self) -> DomainResult<()> {
        let product = self.navigator.current().cloned();
        self.run(LightboxCommand::Present(product))
    }

    fn refresh(&mut self) -> DomainResult<()> {
        self.sequence = filter_and_sort(&self.page.products, &self.category, self.sort);
        tracing::debug!(
            page = %self.page.slug,
            category = %self.category,
            sort = self.sort.slug(),
            shown = self.sequence.len(),
            "listing refreshed"
        );
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use crate::intent::RecordingIntents;
    use crate::lightbox::LightboxState;
    use crate::notice::Notice;
    use crate::share::{MemoryClipboard, UnavailableClipboard};
    use storefront_catalog::ProductId;
    use storefront_core::Money;

    fn page() -> ListingPage {
        ListingPage::new("mens-pants", "Men's Pants")
            .with_categories(["Pants", "Shorts"])
            .with_products(vec![
                Product::new(ProductId(1), "Chinos", Money::usd(89), "Pants"),
                Product::new(ProductId(2), "Cargo Shorts", Money::usd(49), "Shorts"),
                Product::new(ProductId(3), "Wool Trousers", Money::usd(149), "Pants").with_stock(false),
            ])
    }

    fn listing() -> Listing<RecordingIntents> {
        Listing::new(page(), RecordingIntents::new())
    }

    fn names(listing: &Listing<RecordingIntents>) -> Vec<&str> {
        listing.products().iter().map(|p| p.name()).collect()
    }

    fn context() -> StorefrontContext {
        StorefrontContext::new(SessionId::new(), &StorefrontConfig::default()).unwrap()
    }

    #[test]
    fn starts_unfiltered_in_dataset_order() {
        let listing = listing();
        assert_eq!(names(&listing), vec!["Chinos", "Cargo Shorts", "Wool Trousers"]);
        assert_eq!(listing.category(), &CategoryFilter::All);
        assert_eq!(listing.sort(), SortKey::Newest);
        assert!(!listing.lightbox().is_visible());
        assert!(listing.navigation_enabled());
    }

    #[test]
    fn category_and_sort_compose() {
        let mut listing = listing();
        listing.select_category("Pants").unwrap();
        listing.select_sort(SortKey::PriceHighToLow).unwrap();
        assert_eq!(names(&listing), vec!["Wool Trousers", "Chinos"]);
    }

    #[test]
    fn unknown_category_shows_the_empty_state() {
        let mut listing = listing();
        listing.select_category("Hats").unwrap();
        assert!(listing.is_empty());
        assert!(!listing.navigation_enabled());
        match listing.quick_view(0) {
            Err(DomainError::NotFound) => {}
            other => panic!("Expected NotFound error, got {other:?}"),
        }
    }

    #[test]
    fn filter_change_closes_the_quick_view() {
        let mut listing = listing();
        listing.quick_view(1).unwrap();
        assert!(listing.lightbox().is_visible());

        listing.select_sort(SortKey::PriceLowToHigh).unwrap();
        assert!(!listing.lightbox().is_visible());
        assert!(!listing.navigator().is_open());
    }

    #[test]
    fn quick_view_tracks_the_shown_position() {
        let mut listing = listing();
        listing.select_sort(SortKey::PriceLowToHigh).unwrap();
        listing.quick_view(0).unwrap();
        assert_eq!(listing.lightbox().product().map(|p| p.name()), Some("Cargo Shorts"));
        assert_eq!(listing.navigator().index(), 0);
    }

    #[test]
    fn previous_from_first_presents_last() {
        let mut listing = listing();
        listing.quick_view(0).unwrap();
        listing.select_size("M").unwrap();

        assert!(listing.previous().unwrap());
        assert_eq!(listing.lightbox().product().map(|p| p.name()), Some("Wool Trousers"));
        assert_eq!(listing.lightbox().selected_size(), None);
        assert_eq!(listing.navigator().index(), 2);
    }

    #[test]
    fn navigation_is_a_no_op_when_closed_or_single() {
        let mut listing = listing();
        assert!(!listing.next().unwrap());

        listing.select_category("Shorts").unwrap();
        listing.quick_view(0).unwrap();
        let version = listing.lightbox().version();
        assert!(!listing.next().unwrap());
        assert!(!listing.previous().unwrap());
        assert_eq!(listing.lightbox().version(), version);
    }

    #[test]
    fn cart_intent_reaches_the_handler() {
        let mut listing = listing();
        listing.quick_view(0).unwrap();
        listing.add_to_cart().unwrap();
        assert_eq!(listing.lightbox().notice(), Some(Notice::SizeRequired));
        assert!(listing.handler().carts.is_empty());

        listing.select_size("L").unwrap();
        listing.add_to_cart().unwrap();
        let carts = &listing.handler().carts;
        assert_eq!(carts.len(), 1);
        assert_eq!(carts[0].product.name(), "Chinos");
        assert_eq!(carts[0].size, "L");
    }

    #[test]
    fn waitlist_intent_reaches_the_handler() {
        let mut listing = listing();
        listing.quick_view(2).unwrap();
        listing.select_size("S").unwrap();
        listing.open_waitlist().unwrap();
        listing.enter_email(" shopper@example.com ").unwrap();
        listing.submit_waitlist().unwrap();

        let handler = listing.into_handler();
        assert_eq!(handler.waitlist.len(), 1);
        assert_eq!(handler.waitlist[0].email, "shopper@example.com");
        assert!(handler.carts.is_empty());
    }

    #[test]
    fn close_resets_the_navigator() {
        let mut listing = listing();
        listing.quick_view(1).unwrap();
        listing.close().unwrap();
        assert_eq!(listing.lightbox().state(), LightboxState::Hidden);
        assert!(!listing.navigator().is_open());
    }

    #[test]
    fn copy_link_uses_the_page_url() {
        let mut listing = listing();
        listing.quick_view(0).unwrap();
        listing.toggle_share_menu().unwrap();

        let mut clipboard = MemoryClipboard::new();
        let outcome = listing.share(ShareTarget::CopyLink, &context(), &mut clipboard).unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(clipboard.contents(), Some("http://localhost:5173/mens-pants"));
        assert_eq!(listing.lightbox().notice(), Some(Notice::LinkCopied));
        assert!(!listing.lightbox().share_menu_open());
    }

    #[test]
    fn failed_copy_is_noticed() {
        let mut listing = listing();
        listing.quick_view(0).unwrap();
        let outcome = listing
            .share(ShareTarget::CopyLink, &context(), &mut UnavailableClipboard)
            .unwrap();
        assert_eq!(outcome, ShareOutcome::CopyFailed);
        assert_eq!(listing.lightbox().notice(), Some(Notice::CopyFailed));
    }

    #[test]
    fn share_requires_an_open_quick_view() {
        let mut listing = listing();
        let err = listing
            .share(ShareTarget::Facebook, &context(), &mut MemoryClipboard::new())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn dispatch_refuses_to_present_behind_the_navigator() {
        let mut listing = listing();
        listing.quick_view(0).unwrap();
        let other = listing.products()[2].clone();

        match listing.dispatch(LightboxCommand::Present(Some(other))) {
            Err(DomainError::InvariantViolation(_)) => {}
            other => panic!("Expected InvariantViolation error, got {other:?}"),
        }
        assert_eq!(listing.lightbox().product().map(|p| p.name()), Some("Chinos"));
        assert_eq!(listing.navigator().current().map(|p| p.name()), Some("Chinos"));

        assert!(listing.next().unwrap());
        assert_eq!(listing.lightbox().product(), listing.navigator().current());
        assert_eq!(listing.navigator().index(), 1);
    }

    #[test]
    fn dispatch_present_none_closes_like_close() {
        let mut listing = listing();
        listing.quick_view(1).unwrap();
        listing.dispatch(LightboxCommand::Present(None)).unwrap();
        assert!(!listing.lightbox().is_visible());
        assert!(!listing.navigator().is_open());
    }

    #[test]
    fn sort_must_be_offered_by_the_page() {
        let page = ListingPage::find("trending").unwrap();
        let mut listing = Listing::new(page, RecordingIntents::new());
        let before: Vec<_> = listing.products().to_vec();

        match listing.select_sort(SortKey::PriceLowToHigh) {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("price-asc")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert_eq!(listing.sort(), SortKey::Newest);
        assert_eq!(listing.products(), before.as_slice());
        listing.select_sort(SortKey::Newest).unwrap();
    }

    #[test]
    fn toggle_filters_flips_the_panel() {
        let mut listing = listing();
        assert!(listing.toggle_filters());
        assert!(!listing.toggle_filters());
    }
}
