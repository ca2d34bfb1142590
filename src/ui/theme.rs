use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_ELEVATED: Color = Color::Rgb(30, 33, 40);
    pub const BORDER_DIM: Color = Color::Rgb(70, 75, 85);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 115, 125);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_RED: Color = Color::Rgb(230, 100, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn pressed() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn released() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn missing() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn outcome_changed() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn outcome_quiet() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn outcome_suppressed() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn outcome_error() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }
}
