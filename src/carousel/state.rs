// Carousel state - index arithmetic and tooltip visibility
//
// Pure and synchronous: no timers, no channels. The controller wraps this in
// a watch channel and schedules tooltip expiry.

use super::tooltip::{Tooltip, TooltipState, TooltipToken};
use super::CarouselError;
use crate::catalog::Item;
use std::sync::Arc;

/// Snapshot of a carousel, as seen by renderers
///
/// Invariant: `current_index < items.len()` and `items` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    items: Arc<[Item]>,
    current_index: usize,
    tooltip: Tooltip,
}

impl CarouselState {
    /// Create a carousel positioned on the first item
    pub fn new(items: impl Into<Arc<[Item]>>) -> Result<Self, CarouselError> {
        let items = items.into();
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            current_index: 0,
            tooltip: Tooltip::default(),
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The item the renderer should display
    pub fn current_item(&self) -> &Item {
        &self.items[self.current_index]
    }

    /// 1-based position for display ("2/3")
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.len())
    }

    pub fn tooltip(&self) -> TooltipState {
        self.tooltip.state()
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip.state().is_visible()
    }

    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.len();
    }

    pub fn previous(&mut self) {
        let len = self.len();
        self.current_index = (self.current_index + len - 1) % len;
    }

    /// Jump to `index`, wrapping values past the end
    pub fn select(&mut self, index: usize) {
        self.current_index = index % self.len();
    }

    pub fn show_tooltip(&mut self) -> TooltipToken {
        self.tooltip.show()
    }

    /// Returns true if the tooltip was visible
    pub fn dismiss_tooltip(&mut self) -> bool {
        self.tooltip.dismiss()
    }

    /// Returns true if `token` was the visible tooltip and it is now hidden
    pub fn expire_tooltip(&mut self, token: TooltipToken) -> bool {
        self.tooltip.expire(token)
    }
}
