use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    is_raw_mode_enabled,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::event::Event;

pub type PageTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the page is on screen.
///
/// Input is read on a background task. The first event delivered is always
/// [`Event::Init`], which is the page's ready signal. Dropping the session
/// restores the terminal.
pub struct TerminalSession {
    terminal: PageTerminal,
    events: UnboundedReceiver<Event>,
    reader: Option<JoinHandle<()>>,
    stop: CancellationToken,
    active: bool,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        terminal.clear()?;

        let (tx, events) = mpsc::unbounded_channel();
        let stop = CancellationToken::new();
        let reader = tokio::spawn(read_input(tx, stop.clone()));

        Ok(Self {
            terminal,
            events,
            reader: Some(reader),
            stop,
            active: true,
        })
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.events.recv().await
    }

    pub fn terminal(&mut self) -> &mut PageTerminal {
        &mut self.terminal
    }

    pub fn finish(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        self.stop.cancel();
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        if std::mem::take(&mut self.active) {
            restore()?;
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// Leaves the alternate screen and raw mode, if they are active.
pub fn restore() -> Result<()> {
    if is_raw_mode_enabled()? {
        execute!(stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
    }
    Ok(())
}

async fn read_input(tx: UnboundedSender<Event>, stop: CancellationToken) {
    if tx.send(Event::Init).is_err() {
        return;
    }

    let mut stream = EventStream::new();
    loop {
        let next = tokio::select! {
            () = stop.cancelled() => return,
            next = stream.next() => next,
        };
        let Some(Ok(raw)) = next else {
            return;
        };
        let Some(event) = translate(raw) else {
            continue;
        };
        if tx.send(event).is_err() {
            return;
        }
    }
}

/// Keeps key presses and resizes; everything else the page ignores.
pub fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}
