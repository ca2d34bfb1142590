use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),
}

/// What the host reported, in tracker terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Press(i16),
    Release(i16),
    ContextMenu,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::Press(code) => write!(f, "press {}", code),
            Notification::Release(code) => write!(f, "release {}", code),
            Notification::ContextMenu => f.write_str("context menu"),
        }
    }
}
