use crate::app::store::Question;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, question: &Question, feedback: &str, correct: bool) {
    let style = if correct {
        Theme::correct()
    } else {
        Theme::incorrect()
    };

    let block = Block::default()
        .title(" Answer ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(style);

    let lines = vec![
        Line::from(Span::styled(question.text.as_str(), Theme::hint())),
        Line::default(),
        Line::from(Span::styled(feedback, style)),
        Line::default(),
        Line::from(Span::styled("[ Continue ]", Theme::option_selected())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
