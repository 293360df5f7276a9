use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::message_state::MessageKind;
use crate::theme::Theme;

pub struct StatusMessage;

impl StatusMessage {
    pub fn render_line(message: &str, kind: MessageKind) -> Line<'static> {
        let color = match kind {
            MessageKind::Error => Theme::ERROR,
            MessageKind::Success => Theme::SUCCESS,
        };

        Line::from(Span::styled(message.to_string(), Style::default().fg(color)))
    }
}
