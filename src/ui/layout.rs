use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub title_bar: Rect,
    pub card: Rect,
    pub status_bar: Rect,
}

/// Card width and height caps; smaller terminals get the whole content area.
const CARD_WIDTH: u16 = 72;
const CARD_HEIGHT: u16 = 18;

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: title | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title_bar = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Center the card in the content area
    let [column] = Layout::horizontal([Constraint::Max(CARD_WIDTH)])
        .flex(Flex::Center)
        .areas(content);
    let [card] = Layout::vertical([Constraint::Max(CARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(column);

    AppLayout {
        title_bar,
        card,
        status_bar,
    }
}
