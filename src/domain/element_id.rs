use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TARGET: &str = "dynamicTitle";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementIdError {
    #[error("Element id cannot be empty")]
    Empty,
    #[error("Element id cannot contain whitespace: {0:?}")]
    Whitespace(String),
}

/// Lookup key of a single element in the host document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Result<Self, ElementIdError> {
        let id = id.into();
        let trimmed = id.trim();

        if trimmed.is_empty() {
            return Err(ElementIdError::Empty);
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(ElementIdError::Whitespace(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self(DEFAULT_TARGET.to_string())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ElementId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ElementId::new(s).map_err(serde::de::Error::custom)
    }
}
