// TUI application state
//
// Holds the carousel controller, the latest published carousel state, and
// the host-side input state (key holds, pointer presses, drags). The
// controller's state is only ever read from the watch receiver, so the
// screen shows exactly what observers see.

use super::input::{InputHandler, KeyAction};
use super::layout::{hit, ScreenLayout};
use crate::carousel::{CarouselController, CarouselInput, CarouselState};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::events::{Control, DragTracker, Gesture};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// A mouse button held down on one of the controls
#[derive(Debug, Clone, Copy)]
pub struct PointerPress {
    pub control: Control,
    started: Instant,
    hold_fired: bool,
}

/// Main application state for the TUI
pub struct App {
    controller: CarouselController,
    state_rx: watch::Receiver<CarouselState>,

    /// Latest carousel state, refreshed on every change notification
    pub state: CarouselState,

    /// Name shown in the title bar
    pub catalog_name: String,

    pub theme: Theme,

    /// Tooltip text
    pub tooltip_message: String,

    /// Log buffer for the status line
    pub log_buffer: LogBuffer,

    /// Terminal area of the last frame, for mouse hit-testing
    pub viewport: Rect,

    /// Control currently pressed with the mouse
    pub pressed: Option<PointerPress>,

    pub should_quit: bool,

    input: InputHandler,
    drag: DragTracker,
    long_press: Duration,
}

impl App {
    /// `reports_release`: the terminal sends key Repeat/Release events
    pub fn new(
        controller: CarouselController,
        catalog: &Catalog,
        config: &Config,
        log_buffer: LogBuffer,
        reports_release: bool,
    ) -> Self {
        let mut state_rx = controller.subscribe();
        let state = state_rx.borrow_and_update().clone();

        Self {
            controller,
            state_rx,
            state,
            catalog_name: catalog.name.clone(),
            theme: Theme::by_name(&config.theme),
            tooltip_message: config.tooltip.message.clone(),
            log_buffer,
            viewport: Rect::default(),
            pressed: None,
            should_quit: false,
            input: InputHandler::new(config.input.long_press(), reports_release),
            drag: DragTracker::default(),
            long_press: config.input.long_press(),
        }
    }

    /// Receiver to await change notifications on
    pub fn state_rx(&mut self) -> &mut watch::Receiver<CarouselState> {
        &mut self.state_rx
    }

    /// Pull the latest published state
    pub fn sync_state(&mut self) {
        self.state = self.state_rx.borrow_and_update().clone();
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(self.viewport)
    }

    /// Send an input to the controller and refresh
    pub fn apply(&mut self, input: CarouselInput) {
        self.controller.apply(input);
        self.sync_state();
    }

    fn apply_gesture(&mut self, gesture: Gesture) {
        tracing::trace!("Gesture: {:?}", gesture);
        if let Some(input) = gesture.to_input() {
            self.apply(input);
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        match self.input.handle_key(event) {
            Some(KeyAction::Carousel(input)) => self.apply(input),
            Some(KeyAction::Select(index)) => {
                if index < self.state.len() {
                    self.controller.select(index);
                    self.sync_state();
                }
            }
            Some(KeyAction::Quit) => self.should_quit = true,
            None => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let (column, row) = (event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = self.layout();
                let control = if hit(layout.previous_button, column, row) {
                    Some(Control::Previous)
                } else if hit(layout.next_button, column, row) {
                    Some(Control::Next)
                } else {
                    None
                };

                match control {
                    Some(control) => {
                        self.pressed = Some(PointerPress {
                            control,
                            started: Instant::now(),
                            hold_fired: false,
                        });
                    }
                    None => self.drag.start(column),
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(gesture) = self.drag.update(column) {
                    self.apply_gesture(gesture);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag.end();

                let Some(press) = self.pressed.take() else {
                    return;
                };
                let layout = self.layout();
                let rect = match press.control {
                    Control::Previous => layout.previous_button,
                    Control::Next => layout.next_button,
                };
                // A click only counts if released on the same button
                if !press.hold_fired && hit(rect, column, row) {
                    self.apply_gesture(Gesture::Tap(press.control));
                }
            }
            _ => {}
        }
    }

    /// Periodic tick: fire long presses for buttons still held
    pub fn tick(&mut self) {
        self.check_hold(Instant::now());
    }

    fn check_hold(&mut self, now: Instant) {
        let Some(press) = self.pressed.as_mut() else {
            return;
        };
        if press.hold_fired || now.duration_since(press.started) < self.long_press {
            return;
        }
        press.hold_fired = true;
        let control = press.control;
        self.apply_gesture(Gesture::Hold(control));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    fn app_with(reports_release: bool) -> App {
        let catalog = Catalog::bundled();
        let controller = CarouselController::new(catalog.items.clone()).unwrap();
        let mut app = App::new(
            controller,
            &catalog,
            &Config::default(),
            LogBuffer::new(),
            reports_release,
        );
        app.viewport = Rect::new(0, 0, 80, 30);
        app
    }

    fn app() -> App {
        app_with(false)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyEventKind::Press)
    }

    #[test]
    fn keys_drive_the_carousel() {
        let mut app = app();
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.state.current_item().title, "Mountains of Madness");
        app.handle_key(press(KeyCode::Left));
        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.state.current_item().title, "Whispers in the Forest");
    }

    #[test]
    fn number_keys_select_only_existing_items() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('2')));
        assert_eq!(app.state.current_index(), 1);
        app.handle_key(press(KeyCode::Char('9')));
        assert_eq!(app.state.current_index(), 1);
    }

    #[test]
    fn held_next_key_shows_tooltip_without_advancing() {
        let mut app = app_with(true);
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.state.current_index(), 0);

        // Hold past the long-press threshold
        std::thread::sleep(Duration::from_millis(510));
        app.handle_key(key(KeyCode::Right, KeyEventKind::Repeat));
        assert!(app.state.tooltip_visible());

        app.handle_key(key(KeyCode::Right, KeyEventKind::Release));
        assert_eq!(app.state.current_index(), 0);

        // A quick tap still advances, on release
        app.handle_key(press(KeyCode::Right));
        app.handle_key(key(KeyCode::Right, KeyEventKind::Release));
        assert_eq!(app.state.current_index(), 1);
    }

    #[test]
    fn quit_key() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn clicking_next_button_advances() {
        let mut app = app();
        let next = app.layout().next_button;
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), next.x + 1, next.y + 1));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), next.x + 1, next.y + 1));
        assert_eq!(app.state.current_index(), 1);
        assert!(app.pressed.is_none());
    }

    #[test]
    fn releasing_off_the_button_cancels_the_click() {
        let mut app = app();
        let prev = app.layout().previous_button;
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), prev.x, prev.y));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 40, 5));
        assert_eq!(app.state.current_index(), 0);
    }

    #[test]
    fn holding_next_button_shows_tooltip_instead_of_advancing() {
        let mut app = app();
        let next = app.layout().next_button;
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), next.x, next.y));

        let started = app.pressed.map(|p| p.started).unwrap();
        app.check_hold(started + Duration::from_millis(600));
        assert!(app.state.tooltip_visible());

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), next.x, next.y));
        assert_eq!(app.state.current_index(), 0);
        app.apply(CarouselInput::DismissTooltip);
        assert!(!app.state.tooltip_visible());
    }

    #[test]
    fn dragging_left_advances_once_per_step() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 10));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 48, 10));
        assert_eq!(app.state.current_index(), 0);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 45, 10));
        assert_eq!(app.state.current_index(), 1);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 45, 10));

        // Dragging right goes back
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 10));
        assert_eq!(app.state.current_index(), 0);
    }
}
