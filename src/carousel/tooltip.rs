// Tooltip state machine
//
// Hidden --show--> Visible(token) --dismiss|expire(token)--> Hidden
//
// Every `show` mints a fresh token. A deferred expiry only hides the tooltip
// it was scheduled for, so a stale timer can never hide a newer tooltip.

/// Identifies one showing of the tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooltipToken(u64);

/// Tooltip visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible(TooltipToken),
}

impl TooltipState {
    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Visible(_))
    }
}

/// Tooltip state plus the token generator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Tooltip {
    state: TooltipState,
    generation: u64,
}

impl Tooltip {
    pub(super) fn state(&self) -> TooltipState {
        self.state
    }

    /// Show (or re-show) the tooltip, returning the token of this showing
    pub(super) fn show(&mut self) -> TooltipToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TooltipToken(self.generation);
        self.state = TooltipState::Visible(token);
        token
    }

    /// Hide unconditionally. Returns true if it was visible.
    pub(super) fn dismiss(&mut self) -> bool {
        let was_visible = self.state.is_visible();
        self.state = TooltipState::Hidden;
        was_visible
    }

    /// Hide only if `token` is still the current showing
    pub(super) fn expire(&mut self, token: TooltipToken) -> bool {
        if self.state == TooltipState::Visible(token) {
            self.state = TooltipState::Hidden;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let tooltip = Tooltip::default();
        assert_eq!(tooltip.state(), TooltipState::Hidden);
    }

    #[test]
    fn show_then_expire_with_matching_token() {
        let mut tooltip = Tooltip::default();
        let token = tooltip.show();
        assert!(tooltip.state().is_visible());

        assert!(tooltip.expire(token));
        assert_eq!(tooltip.state(), TooltipState::Hidden);
    }

    #[test]
    fn stale_token_does_not_hide_newer_showing() {
        let mut tooltip = Tooltip::default();
        let first = tooltip.show();
        let second = tooltip.show();
        assert_ne!(first, second);

        assert!(!tooltip.expire(first));
        assert_eq!(tooltip.state(), TooltipState::Visible(second));
    }

    #[test]
    fn expire_after_dismiss_is_noop() {
        let mut tooltip = Tooltip::default();
        let token = tooltip.show();
        assert!(tooltip.dismiss());
        assert!(!tooltip.expire(token));
        assert!(!tooltip.dismiss());
    }
}
