mod board;
mod history;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.history.is_enabled());

    render_header(frame, app_layout.header, state);
    board::render(frame, app_layout.board, state);
    if let Some(history_area) = app_layout.history {
        history::render(frame, history_area, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);
    let line = Line::from(vec![
        Span::styled(
            " ◆ ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state.config.display.title.as_str(),
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " │ ",
            Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED),
        ),
        Span::styled(
            "right-click menu disabled",
            Style::default()
                .fg(Theme::TEXT_MUTED)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(bg), area);
}
