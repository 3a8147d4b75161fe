mod feedback;
mod intro;
mod layout;
mod outro;
mod question;
mod status_bar;
mod theme;

use crate::app::view::{Screen, View};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, view: &View) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_title_bar(frame, app_layout.title_bar);

    match &view.screen {
        Screen::Intro {
            api_ready,
            connection_failed,
            loading,
            counts,
            selected,
        } => intro::render(
            frame,
            app_layout.card,
            *api_ready,
            *connection_failed,
            *loading,
            counts,
            *selected,
            view.tick,
        ),
        Screen::Question {
            question: current,
            cursor,
        } => question::render(frame, app_layout.card, current, *cursor),
        Screen::Answer {
            question: current,
            feedback: message,
            correct,
        } => feedback::render(frame, app_layout.card, current, message, *correct),
        Screen::Outro { score, total } => outro::render(frame, app_layout.card, *score, *total),
    }

    status_bar::render(frame, app_layout.status_bar, view);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" crabquiz ", Theme::title().bg(Theme::ACCENT).fg(Color::Black)),
        Span::styled(" Open Trivia Database", Theme::hint()),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}
