use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    api_ready: bool,
    connection_failed: bool,
    loading: bool,
    counts: &[usize],
    selected: usize,
    tick: u64,
) {
    let block = Block::default()
        .title(" Trivia ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let mut picker: Vec<Span> = vec![Span::styled("Questions: ", Theme::text())];
    for (i, n) in counts.iter().enumerate() {
        let style = if i == selected {
            Theme::option_selected()
        } else {
            Theme::option_normal()
        };
        picker.push(Span::styled(format!(" {} ", n), style));
        picker.push(Span::raw(" "));
    }

    let spinner = SPINNER[(tick as usize) % SPINNER.len()];
    let start_line = if !api_ready && connection_failed {
        Line::from(vec![
            Span::styled("[ Start Now ] ", Theme::disabled()),
            Span::styled("service unavailable", Theme::incorrect()),
        ])
    } else if !api_ready {
        Line::from(vec![
            Span::styled("[ Start Now ] ", Theme::disabled()),
            Span::styled(format!("{} connecting...", spinner), Theme::loading()),
        ])
    } else if loading {
        Line::from(Span::styled(
            format!("{} loading questions...", spinner),
            Theme::loading(),
        ))
    } else {
        Line::from(Span::styled("[ Start Now ]", Theme::option_selected()))
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Welcome to the quiz.", Theme::title())),
        Line::default(),
        Line::from(picker),
        Line::default(),
        start_line,
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
