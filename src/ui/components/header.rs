use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::state::AppState;
use crate::theme::Theme;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let (status_text, status_color) = if state.page.ready {
            ("ready", Color::Green)
        } else {
            ("waiting", Color::Gray)
        };

        let line = Line::from(vec![
            Span::styled(&state.app_name, Style::default().fg(Theme::APP_NAME)),
            Span::raw(" | "),
            Span::styled(
                format!("#{}", state.target),
                Style::default().fg(Theme::TARGET_ID),
            ),
            Span::raw(" | "),
            Span::raw(format!("{}ms", state.interval.as_millis())),
            Span::raw(" | "),
            Span::raw(format!("ticks {}", state.page.ticks)),
            Span::raw(" | "),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
