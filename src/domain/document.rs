use thiserror::Error;

use crate::element_id::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Element not found: #{0}")]
    ElementNotFound(ElementId),
    #[error("Duplicate element: #{0}")]
    DuplicateElement(ElementId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub text: String,
}

/// A page of named text elements, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a page with one empty element per id.
    pub fn with_elements<I>(ids: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = ElementId>,
    {
        let mut document = Self::new();
        for id in ids {
            document.insert(id, String::new())?;
        }
        Ok(document)
    }

    pub fn insert(&mut self, id: ElementId, text: impl Into<String>) -> Result<(), DocumentError> {
        if self.contains(&id) {
            return Err(DocumentError::DuplicateElement(id));
        }
        self.elements.push(Element {
            id,
            text: text.into(),
        });
        Ok(())
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn text_of(&self, id: &ElementId) -> Option<&str> {
        self.get(id).map(|e| e.text.as_str())
    }

    pub fn set_text(&mut self, id: &ElementId, text: &str) -> Result<(), DocumentError> {
        let element = self
            .elements
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| DocumentError::ElementNotFound(id.clone()))?;
        text.clone_into(&mut element.text);
        Ok(())
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
