//! Selection/navigation state for the quick view.

use storefront_catalog::Product;

/// Which product the quick view shows and where it sits in the displayed
/// sequence, so prev/next can step through the grid.
///
/// The index is only meaningful while a product is open. It is not reset on
/// close; the next `open` overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Option<Product>,
    index: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `product` at `index`. The pair is trusted as given.
    pub fn open(&mut self, product: Product, index: usize) {
        self.current = Some(product);
        self.index = index;
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Product> {
        self.current.as_ref()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Step forward, wrapping from the last product to the first.
    ///
    /// Returns `false` (and changes nothing) when closed or when `sequence`
    /// has fewer than two products.
    pub fn next(&mut self, sequence: &[Product]) -> bool {
        self.step(sequence, 1)
    }

    /// Step back, wrapping from the first product to the last.
    pub fn previous(&mut self, sequence: &[Product]) -> bool {
        self.step(sequence, sequence.len().saturating_sub(1))
    }

    fn step(&mut self, sequence: &[Product], offset: usize) -> bool {
        let len = sequence.len();
        if len < 2 || self.current.is_none() {
            return false;
        }
        let index = (self.index % len + offset) % len;
        self.index = index;
        self.current = Some(sequence[index].clone());
        true
    }
}
