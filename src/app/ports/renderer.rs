use color_eyre::eyre::Result;

use crate::state::AppState;

#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    fn draw(&mut self, state: &AppState) -> Result<()>;
}
