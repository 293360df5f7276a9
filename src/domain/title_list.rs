use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TITLES: [&str; 3] = ["My Love", "My Heartbeat", "My Everything"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleListError {
    #[error("Title list cannot be empty")]
    Empty,
    #[error("Title at position {index} is blank")]
    BlankTitle { index: usize },
}

/// Ordered, non-empty list of display strings. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TitleList(Vec<String>);

impl TitleList {
    pub fn new<I, S>(titles: I) -> Result<Self, TitleListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();

        if titles.is_empty() {
            return Err(TitleListError::Empty);
        }

        if let Some(index) = titles.iter().position(|t| t.trim().is_empty()) {
            return Err(TitleListError::BlankTitle { index });
        }

        Ok(Self(titles))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for TitleList {
    fn default() -> Self {
        Self(DEFAULT_TITLES.iter().map(|t| (*t).to_string()).collect())
    }
}

impl Index<usize> for TitleList {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<Vec<String>> for TitleList {
    type Error = TitleListError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TitleList> for Vec<String> {
    fn from(value: TitleList) -> Self {
        value.0
    }
}
