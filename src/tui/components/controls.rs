// Previous / Next buttons
//
// Labels shrink to arrows on narrow terminals. A button being held with the
// mouse is drawn in the pressed color.

use crate::events::Control;
use crate::tui::app::App;
use crate::tui::layout::ScreenLayout;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let (prev_label, next_label) = layout.breakpoint.button_labels();

    render_button(f, layout.previous_button, prev_label, is_pressed(app, Control::Previous), app);
    render_button(f, layout.next_button, next_label, is_pressed(app, Control::Next), app);
}

fn is_pressed(app: &App, control: Control) -> bool {
    app.pressed.is_some_and(|press| press.control == control)
}

fn render_button(f: &mut Frame, area: Rect, label: &str, pressed: bool, app: &App) {
    let color = if pressed {
        app.theme.button_pressed
    } else {
        app.theme.button
    };

    let mut style = Style::default().fg(color);
    if pressed {
        style = style.add_modifier(Modifier::BOLD);
    }

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(color)),
        );

    f.render_widget(button, area);
}
