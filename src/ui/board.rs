use crate::app::state::AppState;
use crate::tracker::MouseButton;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Buttons ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let mut lines: Vec<Line> = vec![Line::from("")];
    for name in MouseButton::ALL.map(MouseButton::element_name) {
        let value = match state.board.text(name) {
            Some(text) => {
                let style = if text == "true" {
                    Theme::pressed()
                } else {
                    Theme::released()
                };
                Span::styled(text.to_string(), style)
            }
            None => Span::styled("<missing>", Theme::missing()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<8}", name), Theme::label()),
            value,
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
