use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub board: Rect,
    pub history: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_history: bool) -> AppLayout {
    // Main vertical split: header | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    if !show_history {
        return AppLayout {
            header,
            board: content,
            history: None,
            status_bar,
        };
    }

    // Horizontal: board | gap | history
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(28), // Element board
            Constraint::Min(20),    // History
        ])
        .split(content);

    AppLayout {
        header,
        board: h_chunks[0],
        history: Some(h_chunks[1]),
        status_bar,
    }
}
