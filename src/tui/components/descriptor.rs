// Descriptor card component
//
// Title in bold, then "by {artist}", then "({year})".

use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let item = app.state.current_item();
    let theme = &app.theme;
    let width = area.width.saturating_sub(2) as usize;

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&item.title, width),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&format!("by {}", item.subtitle), width),
            Style::default().fg(theme.subtitle),
        )),
        Line::from(Span::styled(
            format!("({})", item.year),
            Style::default().fg(theme.year),
        )),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.wall_border)),
    );

    f.render_widget(card, area);
}
