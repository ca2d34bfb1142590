use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINT: &str = " q/Esc quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status);

    // Pad to fill remaining space
    let used = status.width() + HINT.width();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(status, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(HINT, Theme::key_hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
