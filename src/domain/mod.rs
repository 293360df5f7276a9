pub mod document;
pub mod element_id;
pub mod title_list;

pub use document::{Document, DocumentError, Element};
pub use element_id::{DEFAULT_TARGET, ElementId, ElementIdError};
pub use title_list::{DEFAULT_TITLES, TitleList, TitleListError};
