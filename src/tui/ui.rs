// UI rendering
//
// Composes the gallery screen from its components. Geometry comes from
// `ScreenLayout`, the same source mouse hit-testing uses.

use super::app::App;
use super::components::{artwork, controls, descriptor, status_bar, title_bar, tooltip};
use super::layout::ScreenLayout;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        f.area(),
    );

    title_bar::render(f, layout.title, app);
    artwork::render(f, layout.wall, app);
    descriptor::render(f, layout.descriptor, app);
    controls::render(f, &layout, app);
    status_bar::render(f, layout.status, app);

    // Overlay last so it sits on top
    tooltip::render(f, &layout, app);
}
