//! Carousel: a cyclic, index-based browser over a fixed list of items
//!
//! The module is split in three layers:
//! - [`tooltip`]: the Hidden/Visible state machine with expiry tokens
//! - [`state`]: pure, synchronous carousel state (index arithmetic + tooltip)
//! - [`controller`]: owns the state in an observable store and the
//!   auto-dismiss timer task
//!
//! Hosts drive the controller with [`CarouselInput`]s and render from a
//! `watch::Receiver<CarouselState>`.

mod controller;
mod state;
mod tooltip;

pub use controller::{CarouselController, DEFAULT_TOOLTIP_DURATION};
pub use state::CarouselState;
pub use tooltip::{TooltipState, TooltipToken};

use std::fmt;

/// Inputs a rendering host can send to the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInput {
    /// Advance to the next item (wraps to the first)
    Next,
    /// Go back to the previous item (wraps to the last)
    Previous,
    /// Sustained press on the Next control: show the tooltip
    LongPress,
    /// Hide the tooltip now
    DismissTooltip,
}

impl CarouselInput {
    /// Parse a script word (used by headless mode)
    pub fn from_word(word: &str) -> Option<Self> {
        match word.trim().to_lowercase().as_str() {
            "next" | "n" => Some(Self::Next),
            "previous" | "prev" | "p" => Some(Self::Previous),
            "hold" | "longpress" | "long-press" => Some(Self::LongPress),
            "dismiss" | "d" => Some(Self::DismissTooltip),
            _ => None,
        }
    }
}

/// Errors constructing a carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one item
    Empty,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::Empty => write!(f, "carousel requires at least one item"),
        }
    }
}

impl std::error::Error for CarouselError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_words_map_to_inputs() {
        assert_eq!(CarouselInput::from_word("next"), Some(CarouselInput::Next));
        assert_eq!(CarouselInput::from_word(" Prev "), Some(CarouselInput::Previous));
        assert_eq!(CarouselInput::from_word("hold"), Some(CarouselInput::LongPress));
        assert_eq!(
            CarouselInput::from_word("dismiss"),
            Some(CarouselInput::DismissTooltip)
        );
        assert_eq!(CarouselInput::from_word("wait"), None);
    }

    #[test]
    fn empty_error_is_readable() {
        assert_eq!(
            CarouselError::Empty.to_string(),
            "carousel requires at least one item"
        );
    }
}
