// Artwork wall component
//
// Terminals can't show the picture itself, so the wall is a framed canvas
// with the image reference centered in it.

use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let item = app.state.current_item();
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.wall_border))
        .style(Style::default().bg(theme.wall));

    let inner = block.inner(area);
    let label = truncate_to_width(&format!("[{}]", item.image), inner.width as usize);

    // Vertically center the single label line
    let padding = inner.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); padding as usize];
    lines.push(Line::from(label));

    let canvas = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.image_ref)
                .add_modifier(Modifier::ITALIC),
        )
        .block(block);

    f.render_widget(canvas, area);
}
