//! Quick view lightbox.
//!
//! The lightbox is modelled like any other aggregate: `handle` decides which
//! events a shopper action produces, `apply` evolves the state. Shopper
//! mistakes (no size picked, no email) are not errors: they produce a
//! [`Notice`] and leave everything else as it was. Errors are reserved for
//! actions the current state does not offer at all.

use chrono::{DateTime, Utc};

use storefront_catalog::Product;
use storefront_core::{Aggregate, AggregateRoot, DomainError, SessionId};

use crate::intent::{CartIntent, WaitlistIntent};
use crate::notice::Notice;
use crate::share::ShareOutcome;

/// Visibility/form state of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightboxState {
    Hidden,
    Viewing,
    WaitlistForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxCommand {
    /// Show a product, or hide the lightbox when `None`.
    Present(Option<Product>),
    Close,
    SelectSize(String),
    OpenWaitlistForm,
    CancelWaitlistForm,
    EditEmail(String),
    AddToCart { at: DateTime<Utc> },
    SubmitWaitlist { at: DateTime<Utc> },
    ToggleShareMenu,
    CompleteShare(ShareOutcome),
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    Presented { product: Product },
    Closed,
    SizeSelected { size: String },
    WaitlistFormOpened,
    WaitlistFormClosed,
    EmailEdited { email: String },
    CartRequested(CartIntent),
    WaitlistRequested(WaitlistIntent),
    ShareMenuToggled { open: bool },
    Noticed(Notice),
    NoticeDismissed,
}

impl LightboxEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            LightboxEvent::Presented { .. } => "presented",
            LightboxEvent::Closed => "closed",
            LightboxEvent::SizeSelected { .. } => "size_selected",
            LightboxEvent::WaitlistFormOpened => "waitlist_form_opened",
            LightboxEvent::WaitlistFormClosed => "waitlist_form_closed",
            LightboxEvent::EmailEdited { .. } => "email_edited",
            LightboxEvent::CartRequested(_) => "cart_requested",
            LightboxEvent::WaitlistRequested(_) => "waitlist_requested",
            LightboxEvent::ShareMenuToggled { .. } => "share_menu_toggled",
            LightboxEvent::Noticed(_) => "noticed",
            LightboxEvent::NoticeDismissed => "notice_dismissed",
        }
    }
}

/// Aggregate root: the quick view of one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    id: SessionId,
    product: Option<Product>,
    state: LightboxState,
    selected_size: Option<String>,
    email: String,
    share_menu_open: bool,
    notice: Option<Notice>,
    version: u64,
}

impl Lightbox {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            product: None,
            state: LightboxState::Hidden,
            selected_size: None,
            email: String::new(),
            share_menu_open: false,
            notice: None,
            version: 0,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state != LightboxState::Hidden
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn share_menu_open(&self) -> bool {
        self.share_menu_open
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Sizes offered by the product on display; empty while hidden.
    pub fn sizes(&self) -> &[String] {
        self.product.as_ref().map(|p| p.sizes()).unwrap_or(&[])
    }

    /// Whether "Add to Cart" is offered (visible, viewing, product in stock).
    pub fn can_add_to_cart(&self) -> bool {
        self.state == LightboxState::Viewing && self.product.as_ref().is_some_and(|p| p.in_stock())
    }
}

impl AggregateRoot for Lightbox {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for Lightbox {
    type Command = LightboxCommand;
    type Event = LightboxEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            LightboxEvent::Presented { product } => {
                // Size, email and menus belong to the product being shown.
                self.product = Some(product.clone());
                self.state = LightboxState::Viewing;
                self.selected_size = None;
                self.email.clear();
                self.share_menu_open = false;
            }
            LightboxEvent::Closed => {
                self.product = None;
                self.state = LightboxState::Hidden;
                self.selected_size = None;
                self.email.clear();
                self.share_menu_open = false;
                self.notice = None;
            }
            LightboxEvent::SizeSelected { size } => {
                self.selected_size = Some(size.clone());
            }
            LightboxEvent::WaitlistFormOpened => {
                self.state = LightboxState::WaitlistForm;
            }
            LightboxEvent::WaitlistFormClosed => {
                self.state = LightboxState::Viewing;
            }
            LightboxEvent::EmailEdited { email } => {
                self.email = email.clone();
            }
            LightboxEvent::CartRequested(_) => {}
            LightboxEvent::WaitlistRequested(_) => {
                self.email.clear();
            }
            LightboxEvent::ShareMenuToggled { open } => {
                self.share_menu_open = *open;
            }
            LightboxEvent::Noticed(notice) => {
                self.notice = Some(*notice);
            }
            LightboxEvent::NoticeDismissed => {
                self.notice = None;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LightboxCommand::Present(Some(product)) => Ok(vec![LightboxEvent::Presented {
                product: product.clone(),
            }]),
            LightboxCommand::Present(None) | LightboxCommand::Close => Ok(self.handle_close()),
            LightboxCommand::DismissNotice => Ok(self
                .notice
                .map(|_| vec![LightboxEvent::NoticeDismissed])
                .unwrap_or_default()),
            LightboxCommand::SelectSize(size) => self.handle_select_size(size),
            LightboxCommand::OpenWaitlistForm => self.handle_open_waitlist(),
            LightboxCommand::CancelWaitlistForm => self.handle_cancel_waitlist(),
            LightboxCommand::EditEmail(email) => self.handle_edit_email(email),
            LightboxCommand::AddToCart { at } => self.handle_add_to_cart(*at),
            LightboxCommand::SubmitWaitlist { at } => self.handle_submit_waitlist(*at),
            LightboxCommand::ToggleShareMenu => {
                self.visible_product()?;
                Ok(vec![LightboxEvent::ShareMenuToggled {
                    open: !self.share_menu_open,
                }])
            }
            LightboxCommand::CompleteShare(outcome) => self.handle_complete_share(outcome),
        }
    }
}

impl Lightbox {
    fn visible_product(&self) -> Result<&Product, DomainError> {
        match (&self.product, self.state) {
            (Some(product), LightboxState::Viewing | LightboxState::WaitlistForm) => Ok(product),
            _ => Err(DomainError::invariant("lightbox is hidden")),
        }
    }

    fn ensure_waitlist_form(&self) -> Result<&Product, DomainError> {
        let product = self.visible_product()?;
        if self.state != LightboxState::WaitlistForm {
            return Err(DomainError::invariant("waitlist form is not open"));
        }
        Ok(product)
    }

    fn handle_close(&self) -> Vec<LightboxEvent> {
        if self.is_visible() {
            vec![LightboxEvent::Closed]
        } else {
            Vec::new()
        }
    }

    fn handle_select_size(&self, size: &str) -> Result<Vec<LightboxEvent>, DomainError> {
        let product = self.visible_product()?;
        if !product.offers_size(size) {
            return Err(DomainError::validation(format!(
                "size {size:?} is not offered for {}",
                product.name()
            )));
        }
        Ok(vec![LightboxEvent::SizeSelected {
            size: size.to_string(),
        }])
    }

    fn handle_open_waitlist(&self) -> Result<Vec<LightboxEvent>, DomainError> {
        self.visible_product()?;
        if self.state == LightboxState::WaitlistForm {
            return Err(DomainError::conflict("waitlist form is already open"));
        }
        Ok(vec![LightboxEvent::WaitlistFormOpened])
    }

    fn handle_cancel_waitlist(&self) -> Result<Vec<LightboxEvent>, DomainError> {
        self.ensure_waitlist_form()?;
        Ok(vec![LightboxEvent::WaitlistFormClosed])
    }

    fn handle_edit_email(&self, email: &str) -> Result<Vec<LightboxEvent>, DomainError> {
        self.ensure_waitlist_form()?;
        Ok(vec![LightboxEvent::EmailEdited {
            email: email.to_string(),
        }])
    }

    fn handle_add_to_cart(&self, at: DateTime<Utc>) -> Result<Vec<LightboxEvent>, DomainError> {
        let product = self.visible_product()?;
        if self.state != LightboxState::Viewing {
            return Err(DomainError::invariant(
                "add to cart is unavailable while the waitlist form is open",
            ));
        }
        if !product.in_stock() {
            return Err(DomainError::invariant(format!(
                "{} is out of stock; only the waitlist is offered",
                product.name()
            )));
        }

        let Some(size) = &self.selected_size else {
            return Ok(vec![LightboxEvent::Noticed(Notice::SizeRequired)]);
        };

        Ok(vec![
            LightboxEvent::CartRequested(CartIntent {
                product: product.clone(),
                size: size.clone(),
                requested_at: at,
            }),
            LightboxEvent::Noticed(Notice::AddedToCart),
        ])
    }

    fn handle_submit_waitlist(&self, at: DateTime<Utc>) -> Result<Vec<LightboxEvent>, DomainError> {
        let product = self.ensure_waitlist_form()?;

        let Some(size) = &self.selected_size else {
            return Ok(vec![LightboxEvent::Noticed(Notice::SizeRequired)]);
        };
        let email = self.email.trim();
        if email.is_empty() {
            return Ok(vec![LightboxEvent::Noticed(Notice::EmailRequired)]);
        }

        Ok(vec![
            LightboxEvent::WaitlistRequested(WaitlistIntent {
                product: product.clone(),
                email: email.to_string(),
                size: size.clone(),
                requested_at: at,
            }),
            LightboxEvent::Noticed(Notice::AddedToWaitlist),
            LightboxEvent::WaitlistFormClosed,
        ])
    }

    fn handle_complete_share(&self, outcome: &ShareOutcome) -> Result<Vec<LightboxEvent>, DomainError> {
        self.visible_product()?;

        let mut events = Vec::new();
        if self.share_menu_open {
            events.push(LightboxEvent::ShareMenuToggled { open: false });
        }
        match outcome {
            ShareOutcome::Opened(_) => {}
            ShareOutcome::Copied => events.push(LightboxEvent::Noticed(Notice::LinkCopied)),
            ShareOutcome::CopyFailed => events.push(LightboxEvent::Noticed(Notice::CopyFailed)),
        }
        Ok(events)
    }
}
