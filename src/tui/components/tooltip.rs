//! Tooltip overlay component
//!
//! Drawn on top of everything while the carousel reports the tooltip as
//! visible. Hiding it is the controller's job; this only renders.

use crate::tui::app::App;
use crate::tui::layout::ScreenLayout;
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the tooltip just above the controls, if visible
///
/// Uses `Clear` widget to ensure the tooltip is visible on top of other content.
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    if !app.state.tooltip_visible() {
        return;
    }

    let area = layout.tooltip(&app.tooltip_message);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.tooltip_bg))
        .style(Style::default().bg(app.theme.tooltip_bg));

    let text = Paragraph::new(app.tooltip_message.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.tooltip_fg)
                .bg(app.theme.tooltip_bg),
        )
        .block(block);

    // Clear the area first so the tooltip appears on top
    f.render_widget(Clear, area);
    f.render_widget(text, area);
}
