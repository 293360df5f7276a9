use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::status_message::StatusMessage;
use crate::app::state::AppState;
use crate::theme::Theme;

const HINTS: &str = "q: quit  r: redraw";

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match state.messages.current() {
            Some(status) => StatusMessage::render_line(&status.text, status.kind),
            None => Line::from(Span::styled(HINTS, Style::default().fg(Theme::HINT))),
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
