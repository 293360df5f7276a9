use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// One line of feedback shown in the footer until `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: MessageKind,
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct MessageState {
    current: Option<StatusLine>,
}

impl MessageState {
    // Long enough to stay visible until the next default tick.
    const ERROR_TIMEOUT: Duration = Duration::from_secs(3);
    const SUCCESS_TIMEOUT: Duration = Duration::from_secs(2);

    pub fn error(&mut self, text: String, now: Instant) {
        self.show(MessageKind::Error, text, now + Self::ERROR_TIMEOUT);
    }

    pub fn success(&mut self, text: String, now: Instant) {
        self.show(MessageKind::Success, text, now + Self::SUCCESS_TIMEOUT);
    }

    fn show(&mut self, kind: MessageKind, text: String, expires_at: Instant) {
        self.current = Some(StatusLine {
            kind,
            text,
            expires_at,
        });
    }

    pub fn current(&self) -> Option<&StatusLine> {
        self.current.as_ref()
    }

    pub fn text_of(&self, kind: MessageKind) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|line| line.kind == kind)
            .map(|line| line.text.as_str())
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.current.as_ref().map(|line| line.expires_at)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if self.expires_at().is_some_and(|at| at <= now) {
            self.current = None;
        }
    }
}
