use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::app::state::AppState;
use crate::theme::Theme;

/// Renders every element of the page, one per line, centered in `area`.
pub struct Page;

impl Page {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let max_width = usize::from(area.width);
        let lines: Vec<Line> = {
            let document = state.document();
            document
                .elements()
                .iter()
                .map(|element| {
                    if element.text.is_empty() {
                        let placeholder = format!("#{}", element.id);
                        return Line::from(Span::styled(
                            truncate_to_width(&placeholder, max_width),
                            Style::default().fg(Theme::PLACEHOLDER),
                        ));
                    }
                    let style = if element.id == state.target {
                        Style::default()
                            .fg(Theme::TITLE)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Theme::ELEMENT_TEXT)
                    };
                    Line::from(Span::styled(
                        truncate_to_width(&element.text, max_width),
                        style,
                    ))
                })
                .collect()
        };

        let line_count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let height = line_count.min(area.height);
        let top = (area.height - height) / 2;
        let body = Rect {
            x: area.x,
            y: area.y + top,
            width: area.width,
            height,
        };

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }
}

/// Cuts `text` to at most `max_width` terminal columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
