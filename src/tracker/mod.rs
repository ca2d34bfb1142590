//! Mouse button state tracking.
//!
//! [`MouseTracker`] owns the pressed/released record for the primary,
//! auxiliary and secondary buttons. It knows nothing about how that record is
//! shown: every press or release returns a [`Transition`] and callers decide
//! what to redraw.

pub mod button;
pub mod state;

pub use button::MouseButton;
pub use state::MouseState;

/// Outcome of a press or release notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The code did not name a tracked button.
    Ignored,
    /// The flag already had the requested value.
    Unchanged(MouseButton),
    Changed(MouseButton),
}

/// A host request to open the default secondary-click menu.
#[derive(Debug, Default)]
pub struct ContextMenuRequest {
    default_prevented: bool,
}

impl ContextMenuRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Default)]
pub struct MouseTracker {
    state: MouseState,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MouseState {
        &self.state
    }

    pub fn press(&mut self, code: i16) -> Transition {
        self.apply(code, true)
    }

    pub fn release(&mut self, code: i16) -> Transition {
        self.apply(code, false)
    }

    /// Cancel the host's default context menu. Button state is untouched.
    pub fn suppress_context_menu(&self, request: &mut ContextMenuRequest) {
        request.prevent_default();
    }

    fn apply(&mut self, code: i16, pressed: bool) -> Transition {
        let Some(button) = MouseButton::from_code(code) else {
            tracing::trace!(code, "ignoring unrecognized button code");
            return Transition::Ignored;
        };
        let previous = self.state.set(button, pressed);
        if previous == pressed {
            Transition::Unchanged(button)
        } else {
            tracing::debug!(%button, pressed, "button state changed");
            Transition::Changed(button)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_all_released() {
        let tracker = MouseTracker::new();
        assert_eq!(*tracker.state(), MouseState::default());
    }

    #[test]
    fn test_press_and_release_affect_only_their_button() {
        let mut tracker = MouseTracker::new();

        assert_eq!(tracker.press(0), Transition::Changed(MouseButton::Primary));
        assert!(tracker.state().left);
        assert!(!tracker.state().middle);
        assert!(!tracker.state().right);

        assert_eq!(tracker.press(2), Transition::Changed(MouseButton::Secondary));
        assert_eq!(
            *tracker.state(),
            MouseState { left: true, middle: false, right: true }
        );

        assert_eq!(tracker.release(0), Transition::Changed(MouseButton::Primary));
        assert_eq!(
            *tracker.state(),
            MouseState { left: false, middle: false, right: true }
        );
    }

    #[test]
    fn test_press_is_idempotent() {
        let mut tracker = MouseTracker::new();
        assert_eq!(tracker.press(1), Transition::Changed(MouseButton::Auxiliary));
        assert_eq!(tracker.press(1), Transition::Unchanged(MouseButton::Auxiliary));
        assert!(tracker.state().middle);

        assert_eq!(tracker.release(1), Transition::Changed(MouseButton::Auxiliary));
        assert_eq!(tracker.release(1), Transition::Unchanged(MouseButton::Auxiliary));
        assert!(!tracker.state().middle);
    }

    #[test]
    fn test_unrecognized_codes_ignored() {
        let mut tracker = MouseTracker::new();
        tracker.press(0);
        let before = *tracker.state();
        for code in [-1, 3, 4, 99, i16::MIN, i16::MAX] {
            assert_eq!(tracker.press(code), Transition::Ignored);
            assert_eq!(tracker.release(code), Transition::Ignored);
        }
        assert_eq!(*tracker.state(), before);
    }

    #[test]
    fn test_last_notification_wins_per_button() {
        let mut tracker = MouseTracker::new();
        let sequence = [(0, true), (1, true), (0, false), (2, true), (1, false), (0, true)];
        for (code, pressed) in sequence {
            if pressed {
                tracker.press(code);
            } else {
                tracker.release(code);
            }
        }
        assert_eq!(
            *tracker.state(),
            MouseState { left: true, middle: false, right: true }
        );
    }

    #[test]
    fn test_context_menu_suppressed_without_state_change() {
        let mut tracker = MouseTracker::new();
        tracker.press(2);
        let before = *tracker.state();

        let mut request = ContextMenuRequest::new();
        assert!(!request.is_default_prevented());
        tracker.suppress_context_menu(&mut request);
        assert!(request.is_default_prevented());
        assert_eq!(*tracker.state(), before);
    }
}
