use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, score: usize, total: usize) {
    let block = Block::default()
        .title(" Results ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let verdict = match (score, total) {
        (_, 0) => "",
        (s, t) if s == t => "Perfect round!",
        (s, t) if s * 2 >= t => "Nicely done.",
        _ => "Better luck next time.",
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Quiz complete!", Theme::title())),
        Line::default(),
        Line::from(Span::styled(
            format!("You scored {} out of {}", score, total),
            Theme::text(),
        )),
        Line::from(Span::styled(verdict, Theme::hint())),
        Line::default(),
        Line::from(Span::styled("[ Start Again ]", Theme::option_selected())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
