// Status bar component
//
// Renders key hints and the most recent log line at the bottom.

use crate::logging::LogEntry;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::util::truncate_to_width;
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: Full hints plus the latest log entry
/// - Narrow: Compact hints only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let status_text = if bp.at_least(Breakpoint::Wide) {
        let hints = " ←/→ browse │ hold → or i: info │ 1-9 jump │ q quit";
        match app.log_buffer.latest() {
            Some(entry) => format!("{} │ {}", hints, log_line(&entry)),
            None => hints.to_string(),
        }
    } else {
        " ←/→ │ i info │ q quit".to_string()
    };

    let status = Paragraph::new(truncate_to_width(&status_text, area.width as usize))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

/// `12:03:04 INFO message`, in local time
fn log_line(entry: &LogEntry) -> String {
    format!(
        "{} {} {}",
        entry.timestamp.with_timezone(&Local).format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::{TimeZone, Utc};

    #[test]
    fn log_line_shows_time_level_and_message() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 5).unwrap();
        let entry = LogEntry {
            timestamp,
            level: LogLevel::Warn,
            message: "No async runtime".to_string(),
        };

        let expected_time = timestamp.with_timezone(&Local).format("%H:%M:%S").to_string();
        assert_eq!(
            log_line(&entry),
            format!("{} WARN No async runtime", expected_time)
        );
    }
}
