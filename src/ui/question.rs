use crate::app::store::Question;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, question: &Question, cursor: usize) {
    let block = Block::default()
        .title(" Question ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let mut lines = vec![
        Line::from(Span::styled(question.text.as_str(), Theme::title())),
        Line::default(),
    ];

    for (i, answer) in question.answers.iter().enumerate() {
        let (marker, style) = if i == cursor {
            ("(•)", Theme::option_selected())
        } else {
            ("( )", Theme::option_normal())
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), Theme::hint()),
            Span::styled(format!("{} {}", marker, answer), style),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
