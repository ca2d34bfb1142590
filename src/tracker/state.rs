use super::button::MouseButton;

/// Which of the three buttons are currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl MouseState {
    pub fn get(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Primary => self.left,
            MouseButton::Auxiliary => self.middle,
            MouseButton::Secondary => self.right,
        }
    }

    /// Set the flag for `button`, returning its previous value.
    pub fn set(&mut self, button: MouseButton, pressed: bool) -> bool {
        let slot = match button {
            MouseButton::Primary => &mut self.left,
            MouseButton::Auxiliary => &mut self.middle,
            MouseButton::Secondary => &mut self.right,
        };
        std::mem::replace(slot, pressed)
    }
}
