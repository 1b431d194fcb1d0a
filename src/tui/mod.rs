// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, carousel state changes, timer ticks)
// - Rendering the gallery screen

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod ui;

use crate::carousel::CarouselController;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Interval for hold detection and log line refresh
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. The controller is dropped on return, which cancels any
/// pending tooltip auto-dismiss.
pub async fn run_tui(
    controller: CarouselController,
    catalog: &Catalog,
    config: &Config,
    log_buffer: LogBuffer,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    // Release/Repeat events (key holds) need the enhancement protocol
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .context("Failed to enable key event types")?;
    } else {
        tracing::info!("Terminal does not report key holds, press i for the tooltip");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(controller, catalog, config, log_buffer, enhanced);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal: run every step, keep the first error
    let restored = restore_terminal(&mut terminal, enhanced);

    result.and(restored)
}

/// Undo everything `run_tui` set up
///
/// Each step runs even if an earlier one failed, so a failure to pop the
/// keyboard flags never leaves the terminal in raw mode.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    enhanced: bool,
) -> Result<()> {
    let mut steps: Vec<Result<()>> = Vec::with_capacity(4);

    if enhanced {
        steps.push(
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
                .context("Failed to restore keyboard mode"),
        );
    }
    steps.push(disable_raw_mode().context("Failed to disable raw mode"));
    steps.push(
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to restore terminal"),
    );
    steps.push(terminal.show_cursor().context("Failed to show cursor"));

    first_error(steps)
}

/// First error among `steps`, or Ok if all succeeded
fn first_error(steps: Vec<Result<()>>) -> Result<()> {
    steps.into_iter().collect()
}

/// Main event loop
///
/// Waits on three sources:
/// 1. Keyboard and mouse input
/// 2. Carousel state changes made outside the input path (tooltip expiry)
/// 3. Timer ticks (mouse hold detection, status line refresh)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

    loop {
        terminal
            .draw(|f| {
                app.viewport = f.area();
                ui::draw(f, app);
            })
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            input = poll_input() => {
                match input {
                    Some(Event::Key(key_event)) => app.handle_key(key_event),
                    Some(Event::Mouse(mouse_event)) => app.handle_mouse(mouse_event),
                    _ => {}
                }
            }

            // Carousel state published by someone else
            changed = app.state_rx().changed() => {
                if changed.is_err() {
                    break;
                }
                app.sync_state();
            }

            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Poll for one terminal event without blocking the runtime for long
async fn poll_input() -> Option<Event> {
    if event::poll(Duration::from_millis(10)).unwrap_or(false) {
        event::read().ok()
    } else {
        None
    }
}
