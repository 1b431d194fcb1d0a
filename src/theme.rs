// Theme support for the TUI
//
// Color palettes selected by name in the config file.
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the gallery screen
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Artwork
    pub wall: Color,
    pub wall_border: Color,
    pub image_ref: Color,

    // Descriptor
    pub title: Color,
    pub subtitle: Color,
    pub year: Color,

    // Controls and overlays
    pub button: Color,
    pub button_pressed: Color,
    pub tooltip_fg: Color,
    pub tooltip_bg: Color,

    // Chrome
    pub title_bar: Color,
    pub status_bar: Color,
    pub background: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Names accepted by `by_name`
    pub const NAMES: [&'static str; 4] = ["auto", "dracula", "nord", "gruvbox"];

    /// Load theme by name (unknown names fall back to "auto")
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(),
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            wall: Color::Reset,
            wall_border: Color::Cyan,
            image_ref: Color::DarkGray,
            title: Color::White,
            subtitle: Color::Gray,
            year: Color::DarkGray,
            button: Color::Cyan,
            button_pressed: Color::Yellow,
            tooltip_fg: Color::Black,
            tooltip_bg: Color::Gray,
            title_bar: Color::Cyan,
            status_bar: Color::Green,
            background: Color::Reset,
            border_type: BorderType::Rounded,
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            wall: Color::Rgb(0x44, 0x47, 0x5a),
            wall_border: Color::Rgb(0xbd, 0x93, 0xf9),
            image_ref: Color::Rgb(0x62, 0x72, 0xa4),
            title: Color::Rgb(0xf8, 0xf8, 0xf2),
            subtitle: Color::Rgb(0x8b, 0xe9, 0xfd),
            year: Color::Rgb(0x62, 0x72, 0xa4),
            button: Color::Rgb(0xff, 0x79, 0xc6),
            button_pressed: Color::Rgb(0xf1, 0xfa, 0x8c),
            tooltip_fg: Color::Rgb(0x28, 0x2a, 0x36),
            tooltip_bg: Color::Rgb(0xf8, 0xf8, 0xf2),
            title_bar: Color::Rgb(0xbd, 0x93, 0xf9),
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            border_type: BorderType::Rounded,
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            wall: Color::Rgb(0x3b, 0x42, 0x52),
            wall_border: Color::Rgb(0x88, 0xc0, 0xd0),
            image_ref: Color::Rgb(0x4c, 0x56, 0x6a),
            title: Color::Rgb(0xec, 0xef, 0xf4),
            subtitle: Color::Rgb(0x81, 0xa1, 0xc1),
            year: Color::Rgb(0x4c, 0x56, 0x6a),
            button: Color::Rgb(0x8f, 0xbc, 0xbb),
            button_pressed: Color::Rgb(0xeb, 0xcb, 0x8b),
            tooltip_fg: Color::Rgb(0x2e, 0x34, 0x40),
            tooltip_bg: Color::Rgb(0xd8, 0xde, 0xe9),
            title_bar: Color::Rgb(0x88, 0xc0, 0xd0),
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            border_type: BorderType::Plain,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            wall: Color::Rgb(0x3c, 0x38, 0x36),
            wall_border: Color::Rgb(0xd7, 0x99, 0x21),
            image_ref: Color::Rgb(0x92, 0x83, 0x74),
            title: Color::Rgb(0xeb, 0xdb, 0xb2),
            subtitle: Color::Rgb(0x83, 0xa5, 0x98),
            year: Color::Rgb(0x92, 0x83, 0x74),
            button: Color::Rgb(0xfe, 0x80, 0x19),
            button_pressed: Color::Rgb(0xfa, 0xbd, 0x2f),
            tooltip_fg: Color::Rgb(0x28, 0x28, 0x28),
            tooltip_bg: Color::Rgb(0xd5, 0xc4, 0xa1),
            title_bar: Color::Rgb(0xd7, 0x99, 0x21),
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),
            background: Color::Rgb(0x28, 0x28, 0x28),
            border_type: BorderType::Thick,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
