// Keyboard input handling
//
// Maps keys to gallery actions and detects long presses:
// - Press: trigger immediately (Left/h = Previous, i = tooltip, ...)
// - Next keys (Right/l) with release reporting: Next fires on Release, unless
//   the key was held past the long-press threshold, which fires LongPress
//   instead (once per hold, on Repeat)
// - Next keys without release reporting: Next fires on Press
//
// Repeat/Release events only arrive on terminals that support the keyboard
// enhancement protocol. Elsewhere a held key is a stream of Presses and just
// keeps advancing; `i` always shows the tooltip.

use crate::carousel::CarouselInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// What a key does in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Carousel(CarouselInput),
    /// Jump to a 0-based index
    Select(usize),
    Quit,
}

/// Tracks a key being held down
#[derive(Debug)]
struct HoldState {
    started: Instant,
    long_press_fired: bool,
}

/// Input handler with long-press detection for the Next keys
pub struct InputHandler {
    long_press: Duration,
    /// Terminal reports Repeat/Release, so Next can wait for the release
    reports_release: bool,
    held: HashMap<KeyCode, HoldState>,
}

fn is_next_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Right | KeyCode::Char('l'))
}

impl InputHandler {
    pub fn new(long_press: Duration, reports_release: bool) -> Self {
        Self {
            long_press,
            reports_release,
            held: HashMap::new(),
        }
    }

    /// Handle a key event, returning the action to perform (if any)
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<KeyAction> {
        self.handle_key_at(event, Instant::now())
    }

    fn handle_key_at(&mut self, event: KeyEvent, now: Instant) -> Option<KeyAction> {
        let code = event.code;

        match event.kind {
            KeyEventKind::Press => {
                if is_next_key(code) && self.reports_release {
                    // Decided on release: tap = Next, hold = LongPress
                    self.held.insert(
                        code,
                        HoldState {
                            started: now,
                            long_press_fired: false,
                        },
                    );
                    return None;
                }
                press_action(code)
            }
            KeyEventKind::Repeat => {
                if !is_next_key(code) {
                    // Previous keeps stepping while held
                    return match code {
                        KeyCode::Left | KeyCode::Char('h') => {
                            Some(KeyAction::Carousel(CarouselInput::Previous))
                        }
                        _ => None,
                    };
                }

                let hold = self.held.entry(code).or_insert(HoldState {
                    started: now,
                    long_press_fired: false,
                });

                if !hold.long_press_fired && now.duration_since(hold.started) >= self.long_press {
                    hold.long_press_fired = true;
                    return Some(KeyAction::Carousel(CarouselInput::LongPress));
                }
                None
            }
            KeyEventKind::Release => match self.held.remove(&code) {
                Some(hold) if !hold.long_press_fired => {
                    Some(KeyAction::Carousel(CarouselInput::Next))
                }
                _ => None,
            },
        }
    }
}

/// Action for a fresh key press
fn press_action(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            Some(KeyAction::Carousel(CarouselInput::Next))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => {
            Some(KeyAction::Carousel(CarouselInput::Previous))
        }
        KeyCode::Char('i') => Some(KeyAction::Carousel(CarouselInput::LongPress)),
        KeyCode::Esc => Some(KeyAction::Carousel(CarouselInput::DismissTooltip)),
        KeyCode::Char(c @ '1'..='9') => Some(KeyAction::Select(c as usize - '1' as usize)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyAction::Quit),
        _ => None,
    }
}
