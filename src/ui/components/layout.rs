use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::footer::Footer;
use super::header::Header;
use super::page::Page;
use crate::app::state::AppState;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let [header_area, page_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        Header::render(frame, header_area, state);
        Page::render(frame, page_area, state);
        Footer::render(frame, footer_area, state);
    }
}
