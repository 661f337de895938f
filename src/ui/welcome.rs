use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::QuestionSet;

pub fn render(frame: &mut Frame, area: Rect, questions: &QuestionSet) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "FLASHCARD QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            deck_description(questions),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "j/k move  ·  enter answer  ·  1-9 pick an option",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "each answer counts once, the next question follows after a pause",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

/// "3 questions · 2-4 options each"
fn deck_description(questions: &QuestionSet) -> String {
    let counts = questions.iter().map(|q| q.options().len());
    let fewest = counts.clone().min().unwrap_or_default();
    let most = counts.max().unwrap_or_default();

    let plural = if questions.len() == 1 { "" } else { "s" };
    let options = if fewest == most {
        format!("{fewest} options each")
    } else {
        format!("{fewest}-{most} options each")
    };
    format!("{} question{plural}  ·  {options}", questions.len())
}
