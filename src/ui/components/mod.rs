pub mod footer;
pub mod header;
pub mod layout;
pub mod page;
pub mod status_message;
