//! Round-robin selection over a fixed title list.
//!
//! The rotator owns the only mutable state of the page decoration: the index of
//! the title shown by the next tick. It never touches a clock; whoever owns it
//! decides when to call [`TitleRotator::tick`].

use thiserror::Error;
use tracing::warn;

use crate::domain::{ElementId, TitleList};
use crate::ports::{HostDocument, HostDocumentError};
use crate::settings::MissingTargetPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Displayed,
    TargetMissing,
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Zero-based count of ticks attempted before this one.
    pub sequence: u64,
    /// Index of `title` in the title list.
    pub index: usize,
    pub title: String,
    pub target: ElementId,
    pub outcome: TickOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickError {
    #[error("Display target not found: #{target}")]
    TargetNotFound { target: ElementId },
    #[error("Display target #{target} rejected update: {reason}")]
    Rejected { target: ElementId, reason: String },
}

#[derive(Debug, Clone)]
pub struct TitleRotator {
    titles: TitleList,
    index: usize,
    ticks: u64,
}

impl TitleRotator {
    pub fn new(titles: TitleList) -> Self {
        Self {
            titles,
            index: 0,
            ticks: 0,
        }
    }

    /// Index of the title the next tick will show. Always `< titles().len()`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.titles[self.index]
    }

    pub fn titles(&self) -> &TitleList {
        &self.titles
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns the current title and moves to the next one, wrapping at the end.
    pub fn advance(&mut self) -> &str {
        let shown = self.index;
        self.index = (self.index + 1) % self.titles.len();
        &self.titles[shown]
    }

    /// Writes the current title to `target` and advances.
    ///
    /// A missing target is handled per `policy`: `Skip` still advances and
    /// reports [`TickOutcome::TargetMissing`]; `Fail` returns an error and keeps
    /// the index where it was.
    pub fn tick(
        &mut self,
        document: &mut dyn HostDocument,
        target: &ElementId,
        policy: MissingTargetPolicy,
    ) -> Result<TickReport, TickError> {
        let sequence = self.ticks;
        self.ticks += 1;

        let index = self.index;
        let title = self.current().to_string();

        let outcome = match document.set_text(target, &title) {
            Ok(()) => TickOutcome::Displayed,
            Err(HostDocumentError::TargetNotFound(_)) => match policy {
                MissingTargetPolicy::Skip => {
                    warn!(target_id = %target, sequence, "display target missing, skipping title");
                    TickOutcome::TargetMissing
                }
                MissingTargetPolicy::Fail => {
                    return Err(TickError::TargetNotFound {
                        target: target.clone(),
                    });
                }
            },
            Err(HostDocumentError::Rejected(reason)) => {
                return Err(TickError::Rejected {
                    target: target.clone(),
                    reason,
                });
            }
        };

        self.advance();

        Ok(TickReport {
            sequence,
            index,
            title,
            target: target.clone(),
            outcome,
        })
    }
}
