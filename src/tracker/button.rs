/// One of the three standard mouse buttons.
///
/// Hosts report buttons as small integer codes: `0` primary, `1` auxiliary,
/// `2` secondary. Anything else is not a button this program tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [
        MouseButton::Primary,
        MouseButton::Auxiliary,
        MouseButton::Secondary,
    ];

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(MouseButton::Primary),
            1 => Some(MouseButton::Auxiliary),
            2 => Some(MouseButton::Secondary),
            _ => None,
        }
    }

    pub fn code(self) -> i16 {
        match self {
            MouseButton::Primary => 0,
            MouseButton::Auxiliary => 1,
            MouseButton::Secondary => 2,
        }
    }

    /// Name of the display element bound to this button.
    pub fn element_name(self) -> &'static str {
        match self {
            MouseButton::Primary => "left",
            MouseButton::Auxiliary => "middle",
            MouseButton::Secondary => "right",
        }
    }
}

impl std::fmt::Display for MouseButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MouseButton::Primary => "primary",
            MouseButton::Auxiliary => "auxiliary",
            MouseButton::Secondary => "secondary",
        };
        f.write_str(name)
    }
}
