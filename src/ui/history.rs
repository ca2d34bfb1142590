use crate::app::state::{AppState, Outcome};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let count = state.history.len();
    let title = if count > 0 {
        format!(" History ({}) ", count)
    } else {
        " History ".to_string()
    };
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .history
        .iter()
        .take(visible)
        .map(|entry| {
            let (label, style) = match &entry.outcome {
                Outcome::Changed => ("changed".to_string(), Theme::outcome_changed()),
                Outcome::Unchanged => ("unchanged".to_string(), Theme::outcome_quiet()),
                Outcome::Ignored => ("ignored".to_string(), Theme::outcome_quiet()),
                Outcome::Suppressed => ("menu suppressed".to_string(), Theme::outcome_suppressed()),
                Outcome::DisplayError(e) => (e.clone(), Theme::outcome_error()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", entry.timestamp), Theme::timestamp()),
                Span::styled(format!("{:<14}", entry.notification.to_string()), style),
                Span::styled(label, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
