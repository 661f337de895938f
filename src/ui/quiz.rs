use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::option_label;
use crate::app::App;
use crate::models::{AnswerResult, Question};

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question.text());
    render_options(
        frame,
        chunks[2],
        question,
        app.selected_option(),
        app.last_answer(),
    );
    render_feedback(frame, chunks[3], app);
    render_controls(frame, chunks[4], app, now);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "Question {} of {}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_style(index: usize, selected: usize, answer: Option<&AnswerResult>) -> Style {
    match answer {
        Some(answer) if index == answer.correct_index => Style::default().fg(Color::Green).bold(),
        Some(answer) if index == answer.selected_index => Style::default().fg(Color::Red).bold(),
        Some(_) => Style::default().fg(Color::DarkGray),
        None if index == selected => Style::default().fg(Color::Cyan).bold(),
        None => Style::default().fg(Color::Gray),
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: usize,
    answer: Option<&AnswerResult>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options().len() * 2);

    for (index, option) in question.options().iter().enumerate() {
        let style = option_style(index, selected, answer);
        let marker = match answer {
            Some(answer) if index == answer.selected_index => ">",
            None if index == selected => ">",
            _ => " ",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = app.error_message() {
        Line::from(Span::styled(error, Style::default().fg(Color::Red)))
    } else if let Some(feedback) = app.feedback() {
        let color = if app.last_answer().is_some_and(|a| a.is_correct) {
            Color::Green
        } else {
            Color::Red
        };
        Line::from(Span::styled(feedback, Style::default().fg(color).bold()))
    } else {
        Line::from("")
    };

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let widget = if app.last_answer().is_none() {
        Paragraph::new("j/k navigate  ·  enter select  ·  1-9 answer  ·  q quit").fg(Color::DarkGray)
    } else if app.is_next_ready(now) {
        Paragraph::new("ENTER next question").fg(Color::Green).bold()
    } else {
        Paragraph::new("·  ·  ·").fg(Color::DarkGray)
    };

    frame.render_widget(widget.alignment(Alignment::Center), area);
}
