mod quiz;
mod result;
mod welcome;

use std::time::Instant;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app.questions()),
        AppState::Quiz => quiz::render(frame, area, app, now),
        AppState::Result => result::render(frame, area, app),
    }
}

/// Letter label for an option: A, B, ... Z, then 27, 28, ...
fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}
