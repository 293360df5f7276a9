use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use crate::domain::{Document, DocumentError, ElementId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostDocumentError {
    #[error("Display target not found: #{0}")]
    TargetNotFound(ElementId),
    #[error("Display target rejected update: {0}")]
    Rejected(String),
}

/// Write-only access to the page the rotator decorates.
#[cfg_attr(test, mockall::automock)]
pub trait HostDocument: Send {
    fn set_text(&mut self, id: &ElementId, text: &str) -> Result<(), HostDocumentError>;
}

/// Page shared between the tick job and the renderer.
pub type SharedDocument = Arc<Mutex<Document>>;

impl HostDocument for Document {
    fn set_text(&mut self, id: &ElementId, text: &str) -> Result<(), HostDocumentError> {
        Document::set_text(self, id, text).map_err(|e| match e {
            DocumentError::ElementNotFound(id) => HostDocumentError::TargetNotFound(id),
            other => HostDocumentError::Rejected(other.to_string()),
        })
    }
}

impl HostDocument for SharedDocument {
    fn set_text(&mut self, id: &ElementId, text: &str) -> Result<(), HostDocumentError> {
        // Elements are plain strings, so a poisoned page is still consistent.
        let mut document = self.lock().unwrap_or_else(PoisonError::into_inner);
        HostDocument::set_text(&mut *document, id, text)
    }
}
