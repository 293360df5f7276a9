use crate::rotator::TickReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),

    /// The page is set up and may be written to.
    DocumentReady,
    TitleTicked(TickReport),
    TickFailed(String),
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
