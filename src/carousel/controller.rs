// Carousel controller - observable state plus the tooltip auto-dismiss timer
//
// State lives in a tokio watch channel so any number of renderers can
// subscribe and re-read `current_item` / `tooltip_visible` on change.
// The auto-dismiss is a spawned task whose handle the controller owns:
// dismiss, re-show and drop all abort it. The task only holds a Weak
// reference to the store, so it can never touch state after teardown.

use super::state::CarouselState;
use super::tooltip::TooltipToken;
use super::{CarouselError, CarouselInput};
use crate::catalog::Item;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How long the tooltip stays up after a long press
pub const DEFAULT_TOOLTIP_DURATION: Duration = Duration::from_millis(2000);

/// Owns a carousel's state for the lifetime of one screen
pub struct CarouselController {
    store: Arc<watch::Sender<CarouselState>>,
    tooltip_duration: Duration,
    pending_dismiss: Option<JoinHandle<()>>,
}

impl CarouselController {
    /// Create a controller with the default 2s tooltip
    pub fn new(items: impl Into<Arc<[Item]>>) -> Result<Self, CarouselError> {
        Self::with_tooltip_duration(items, DEFAULT_TOOLTIP_DURATION)
    }

    pub fn with_tooltip_duration(
        items: impl Into<Arc<[Item]>>,
        tooltip_duration: Duration,
    ) -> Result<Self, CarouselError> {
        let state = CarouselState::new(items)?;
        let (store, _) = watch::channel(state);
        Ok(Self {
            store: Arc::new(store),
            tooltip_duration,
            pending_dismiss: None,
        })
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.store.subscribe()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> CarouselState {
        self.store.borrow().clone()
    }

    pub fn current_index(&self) -> usize {
        self.store.borrow().current_index()
    }

    pub fn current_item(&self) -> Item {
        self.store.borrow().current_item().clone()
    }

    pub fn tooltip_visible(&self) -> bool {
        self.store.borrow().tooltip_visible()
    }

    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn next(&mut self) {
        self.navigate(CarouselState::next);
    }

    pub fn previous(&mut self) {
        self.navigate(CarouselState::previous);
    }

    pub fn select(&mut self, index: usize) {
        self.navigate(|state| state.select(index));
    }

    /// Show the tooltip now and hide it after the tooltip duration
    ///
    /// Must be called from within a Tokio runtime for the auto-dismiss to be
    /// scheduled; outside one the tooltip stays up until dismissed.
    pub fn show_tooltip(&mut self) {
        self.cancel_pending_dismiss();

        let mut shown = None;
        self.store.send_modify(|state| shown = Some(state.show_tooltip()));
        let Some(token) = shown else {
            return;
        };

        tracing::debug!(
            "Tooltip shown, auto-dismiss in {}ms",
            self.tooltip_duration.as_millis()
        );

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let store = Arc::downgrade(&self.store);
                let delay = self.tooltip_duration;
                self.pending_dismiss = Some(runtime.spawn(expire_after(store, token, delay)));
            }
            Err(_) => {
                tracing::warn!("No async runtime, tooltip will not auto-dismiss");
            }
        }
    }

    /// Hide the tooltip now and cancel its pending auto-dismiss
    pub fn dismiss_tooltip(&mut self) {
        self.cancel_pending_dismiss();
        if self.store.send_if_modified(CarouselState::dismiss_tooltip) {
            tracing::debug!("Tooltip dismissed");
        }
    }

    /// Dispatch a host input
    pub fn apply(&mut self, input: CarouselInput) {
        match input {
            CarouselInput::Next => self.next(),
            CarouselInput::Previous => self.previous(),
            CarouselInput::LongPress => self.show_tooltip(),
            CarouselInput::DismissTooltip => self.dismiss_tooltip(),
        }
    }

    /// Whether an auto-dismiss task is scheduled and not yet finished
    pub fn has_pending_dismiss(&self) -> bool {
        self.pending_dismiss
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn navigate(&mut self, step: impl FnOnce(&mut CarouselState)) {
        let changed = self.store.send_if_modified(|state| {
            let before = state.current_index();
            step(state);
            state.current_index() != before
        });

        if changed {
            let state = self.store.borrow();
            let (position, len) = state.position();
            tracing::debug!(
                "Showing {}/{}: {}",
                position,
                len,
                state.current_item().title
            );
        }
    }

    fn cancel_pending_dismiss(&mut self) {
        if let Some(handle) = self.pending_dismiss.take() {
            handle.abort();
        }
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.cancel_pending_dismiss();
    }
}

/// Deferred half of `show_tooltip`
async fn expire_after(
    store: Weak<watch::Sender<CarouselState>>,
    token: TooltipToken,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;

    // Controller gone: nothing left to hide
    let Some(store) = store.upgrade() else {
        return;
    };

    if store.send_if_modified(|state| state.expire_tooltip(token)) {
        tracing::debug!("Tooltip auto-dismissed");
    }
}
