use color_eyre::eyre::Result;

use crate::app::ports::renderer::Renderer;
use crate::app::state::AppState;
use crate::components::layout::MainLayout;
use crate::tui::TerminalSession;

pub struct TuiAdapter<'a> {
    session: &'a mut TerminalSession,
}

impl<'a> TuiAdapter<'a> {
    pub fn new(session: &'a mut TerminalSession) -> Self {
        Self { session }
    }
}

impl Renderer for TuiAdapter<'_> {
    fn draw(&mut self, state: &AppState) -> Result<()> {
        self.session.terminal().draw(|frame| {
            MainLayout::render(frame, state);
        })?;
        Ok(())
    }
}
