// Gestures that flow from the rendering host to the carousel
//
// The host reports what the user physically did (tap a button, hold it,
// drag across the screen). This module turns those gestures into
// `CarouselInput`s so every host maps them the same way.

use crate::carousel::CarouselInput;

/// Horizontal distance (terminal columns) a drag must cover per step
pub const DRAG_STEP_COLUMNS: i32 = 4;

/// On-screen controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

/// A user gesture as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Short press on a control
    Tap(Control),
    /// Sustained press on a control
    Hold(Control),
    /// Horizontal drag; positive is to the right
    Drag { delta: f32 },
}

impl Gesture {
    /// Map a gesture to a carousel input, if it has one
    ///
    /// Dragging right reveals the previous item, dragging left the next one.
    /// Only the Next control reacts to being held.
    pub fn to_input(self) -> Option<CarouselInput> {
        match self {
            Gesture::Tap(Control::Previous) => Some(CarouselInput::Previous),
            Gesture::Tap(Control::Next) => Some(CarouselInput::Next),
            Gesture::Hold(Control::Next) => Some(CarouselInput::LongPress),
            Gesture::Hold(Control::Previous) => None,
            Gesture::Drag { delta } if delta > 0.0 => Some(CarouselInput::Previous),
            Gesture::Drag { delta } if delta < 0.0 => Some(CarouselInput::Next),
            Gesture::Drag { .. } => None,
        }
    }
}

/// Turns a stream of mouse positions into discrete drag gestures
///
/// Emits one gesture each time the accumulated horizontal movement crosses
/// the step, so a single swipe moves one item instead of spinning the list.
#[derive(Debug, Clone)]
pub struct DragTracker {
    step: i32,
    last_column: Option<u16>,
    accumulated: i32,
}

impl DragTracker {
    pub fn new(step: i32) -> Self {
        Self {
            step: step.max(1),
            last_column: None,
            accumulated: 0,
        }
    }

    /// Pointer went down at `column`
    pub fn start(&mut self, column: u16) {
        self.last_column = Some(column);
        self.accumulated = 0;
    }

    /// Pointer moved to `column` while down
    pub fn update(&mut self, column: u16) -> Option<Gesture> {
        let last = self.last_column?;
        self.last_column = Some(column);
        self.accumulated += column as i32 - last as i32;

        if self.accumulated.abs() >= self.step {
            let delta = self.accumulated as f32;
            self.accumulated = 0;
            Some(Gesture::Drag { delta })
        } else {
            None
        }
    }

    /// Pointer released
    pub fn end(&mut self) {
        self.last_column = None;
        self.accumulated = 0;
    }

    pub fn is_dragging(&self) -> bool {
        self.last_column.is_some()
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DRAG_STEP_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_map_to_navigation() {
        assert_eq!(
            Gesture::Tap(Control::Next).to_input(),
            Some(CarouselInput::Next)
        );
        assert_eq!(
            Gesture::Tap(Control::Previous).to_input(),
            Some(CarouselInput::Previous)
        );
    }

    #[test]
    fn only_next_reacts_to_hold() {
        assert_eq!(
            Gesture::Hold(Control::Next).to_input(),
            Some(CarouselInput::LongPress)
        );
        assert_eq!(Gesture::Hold(Control::Previous).to_input(), None);
    }

    #[test]
    fn drag_direction() {
        assert_eq!(
            Gesture::Drag { delta: 12.0 }.to_input(),
            Some(CarouselInput::Previous)
        );
        assert_eq!(
            Gesture::Drag { delta: -3.5 }.to_input(),
            Some(CarouselInput::Next)
        );
        assert_eq!(Gesture::Drag { delta: 0.0 }.to_input(), None);
    }

    #[test]
    fn tracker_emits_once_per_step() {
        let mut tracker = DragTracker::new(4);
        tracker.start(20);
        assert_eq!(tracker.update(18), None);
        assert_eq!(tracker.update(16), Some(Gesture::Drag { delta: -4.0 }));
        assert_eq!(tracker.update(15), None);
        assert_eq!(tracker.update(21), Some(Gesture::Drag { delta: 5.0 }));
    }

    #[test]
    fn tracker_ignores_moves_without_press() {
        let mut tracker = DragTracker::default();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.update(50), None);
        assert_eq!(tracker.update(10), None);
        assert!(!tracker.is_dragging());

        tracker.start(10);
        tracker.end();
        assert_eq!(tracker.update(30), None);
    }
}
