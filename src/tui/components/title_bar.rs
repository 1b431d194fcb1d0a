// Title bar component
//
// Renders the catalog name and the "n / len" position of the current item.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let (position, len) = app.state.position();

    let title = Paragraph::new(format!(" 🖼  {}", app.catalog_name))
        .style(
            Style::default()
                .fg(app.theme.title_bar)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title_bar))
                .title_top(Line::from(format!(" {} / {} ", position, len)).right_aligned()),
        );

    f.render_widget(title, area);
}
