use crate::app::view::{Screen, View};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, view: &View) {
    let mut parts: Vec<Span> = Vec::new();

    if let Some((score, progress)) = view.quiz_status {
        parts.push(Span::styled(
            format!(" Score: {} ", score),
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        ));
        parts.push(Span::styled(
            format!("| Question {} of {} ", progress.current, progress.total),
            Theme::status_bar(),
        ));
    }

    if let Some(msg) = view.status_message {
        parts.push(Span::styled(format!(" {} ", msg), Theme::status_error()));
    }

    // Key hints, right-aligned
    let hints = key_hints(&view.screen);
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.width() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", hints),
        Style::default().fg(Theme::ACCENT).bg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}

fn key_hints(screen: &Screen) -> &'static str {
    match screen {
        Screen::Intro { .. } => "←/→ count  Enter start  q quit",
        Screen::Question { .. } => "↑/↓ choose  1-9 pick  Enter submit",
        Screen::Answer { .. } => "Enter continue  q quit",
        Screen::Outro { .. } => "Enter play again  q quit",
    }
}
