//! Projection of [`MouseState`] onto named text elements.

pub mod board;

pub use board::ElementBoard;

use crate::tracker::{MouseButton, MouseState};
use thiserror::Error;

/// A named display element could not be found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("display element not found: {element}")]
pub struct LookupError {
    pub element: String,
}

/// Somewhere text elements live and can be written by name.
pub trait DisplaySurface {
    fn set_text(&mut self, element: &str, text: &str) -> Result<(), LookupError>;
}

/// Write each button flag as `"true"`/`"false"` into its element, in the
/// order left, middle, right.
///
/// Writes are sequential: on a missing element the ones before it already
/// hold the new text and the ones after it are left alone.
pub fn synchronize<S: DisplaySurface + ?Sized>(
    state: &MouseState,
    surface: &mut S,
) -> Result<(), LookupError> {
    for button in MouseButton::ALL {
        let text = if state.get(button) { "true" } else { "false" };
        surface.set_text(button.element_name(), text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::MouseTracker;

    fn texts(board: &ElementBoard) -> Vec<Option<&str>> {
        ["left", "middle", "right"]
            .iter()
            .map(|name| board.text(name))
            .collect()
    }

    #[test]
    fn test_initial_state_shows_false() {
        let tracker = MouseTracker::new();
        let mut board = ElementBoard::standard();
        synchronize(tracker.state(), &mut board).unwrap();
        assert_eq!(texts(&board), vec![Some("false"), Some("false"), Some("false")]);
    }

    #[test]
    fn test_press_primary() {
        let mut tracker = MouseTracker::new();
        let mut board = ElementBoard::standard();
        tracker.press(0);
        synchronize(tracker.state(), &mut board).unwrap();
        assert_eq!(texts(&board), vec![Some("true"), Some("false"), Some("false")]);
    }

    #[test]
    fn test_press_then_release_primary() {
        let mut tracker = MouseTracker::new();
        let mut board = ElementBoard::standard();
        tracker.press(0);
        synchronize(tracker.state(), &mut board).unwrap();
        tracker.release(0);
        synchronize(tracker.state(), &mut board).unwrap();
        assert_eq!(board.text("left"), Some("false"));
    }

    #[test]
    fn test_press_auxiliary_and_secondary() {
        let mut tracker = MouseTracker::new();
        let mut board = ElementBoard::standard();
        tracker.press(1);
        synchronize(tracker.state(), &mut board).unwrap();
        tracker.press(2);
        synchronize(tracker.state(), &mut board).unwrap();
        assert_eq!(texts(&board), vec![Some("false"), Some("true"), Some("true")]);
    }

    #[test]
    fn test_missing_element_reports_lookup_error() {
        let mut tracker = MouseTracker::new();
        let mut board = ElementBoard::with_elements(["left", "right"]);
        tracker.press(0);
        tracker.press(2);

        let err = synchronize(tracker.state(), &mut board).unwrap_err();
        assert_eq!(err.element, "middle");
        assert_eq!(err.to_string(), "display element not found: middle");
        // left was written before the failure, right was never reached
        assert_eq!(board.text("left"), Some("true"));
        assert_eq!(board.text("right"), Some(""));
        assert_eq!(board.text("middle"), None);
    }

    #[test]
    fn test_sync_after_failure_is_independent() {
        let mut tracker = MouseTracker::new();
        let mut board = ElementBoard::with_elements(["left", "middle"]);
        tracker.press(0);
        assert!(synchronize(tracker.state(), &mut board).is_err());
        tracker.release(0);
        tracker.press(1);
        let err = synchronize(tracker.state(), &mut board).unwrap_err();
        assert_eq!(err.element, "right");
        assert_eq!(board.text("left"), Some("false"));
        assert_eq!(board.text("middle"), Some("true"));
    }
}
