//! Responsive breakpoints and screen geometry.
//!
//! Single source of truth for where everything sits: rendering and mouse
//! hit-testing both go through `ScreenLayout`, so clicks always land on what
//! was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }

    /// Button labels for this width
    pub fn button_labels(&self) -> (&'static str, &'static str) {
        if self.at_least(Breakpoint::Normal) {
            ("◀ Previous", "Next ▶")
        } else {
            ("◀", "▶")
        }
    }
}

/// Rectangles for every section of the gallery screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub breakpoint: Breakpoint,
    pub title: Rect,
    pub wall: Rect,
    pub descriptor: Rect,
    pub controls: Rect,
    pub previous_button: Rect,
    pub next_button: Rect,
    pub status: Rect,
}

/// Height of the descriptor card: three text lines plus borders
const DESCRIPTOR_HEIGHT: u16 = 5;
const CONTROLS_HEIGHT: u16 = 3;

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let breakpoint = Breakpoint::from_width(area.width);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(DESCRIPTOR_HEIGHT),
                Constraint::Length(CONTROLS_HEIGHT),
                Constraint::Length(2),
            ])
            .split(area);

        let (title, wall, descriptor, controls, status) = (rows[0], rows[1], rows[2], rows[3], rows[4]);

        // Keep the wall roughly square in cells (terminal cells are ~2:1)
        let wall = center_horizontally(wall, wall.height.saturating_mul(2).max(10));
        let descriptor = center_horizontally(descriptor, wall.width.max(24));

        let (prev_label, next_label) = breakpoint.button_labels();
        let button_width = |label: &str| label.width() as u16 + 4;

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(button_width(prev_label)),
                Constraint::Min(0),
                Constraint::Length(button_width(next_label)),
            ])
            .horizontal_margin(1)
            .split(controls);

        Self {
            breakpoint,
            title,
            wall,
            descriptor,
            controls,
            previous_button: buttons[0],
            next_button: buttons[2],
            status,
        }
    }

    /// Overlay rectangle for a tooltip of `message`, just above the controls
    pub fn tooltip(&self, message: &str) -> Rect {
        let width = (message.width() as u16 + 4).min(self.controls.width);
        let height = 3;
        let x = self.controls.x + self.controls.width.saturating_sub(width) / 2;
        let y = self.controls.y.saturating_sub(height);
        Rect::new(x, y, width, height)
    }
}

/// Narrow `area` to `width` columns, centered
fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Whether a terminal cell lies inside `rect`
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }

    #[test]
    fn buttons_sit_at_both_ends_of_controls_row() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.previous_button.y, layout.controls.y);
        assert_eq!(layout.previous_button.x, 1);
        assert_eq!(
            layout.next_button.x + layout.next_button.width,
            layout.controls.x + layout.controls.width - 1
        );
        assert!(layout.previous_button.width > 0 && layout.next_button.width > 0);
    }

    #[test]
    fn compact_uses_short_labels() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 40, 30));
        assert_eq!(layout.breakpoint, Breakpoint::Compact);
        assert_eq!(layout.previous_button.width, 5);
    }

    #[test]
    fn tooltip_is_above_controls_and_centered() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30));
        let tip = layout.tooltip("Hold for more info!");
        assert_eq!(tip.y + tip.height, layout.controls.y);
        assert_eq!(tip.width, 23);
        assert_eq!(tip.x, (80 - 23) / 2);
    }

    #[test]
    fn tooltip_width_counts_display_columns() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30));
        // Four CJK characters take eight columns
        assert_eq!(layout.tooltip("長押し！").width, 12);
    }

    #[test]
    fn tooltip_never_exceeds_controls_row() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 30, 30));
        let tip = layout.tooltip(&"絵".repeat(40));
        assert_eq!(tip.width, layout.controls.width);
    }

    #[test]
    fn hit_testing() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(hit(rect, 2, 3));
        assert!(hit(rect, 5, 4));
        assert!(!hit(rect, 6, 4));
        assert!(!hit(rect, 2, 5));
    }
}
