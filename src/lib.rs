//! Rotates a title through a fixed list on a timer, writing each one into a
//! named element of a page rendered in the terminal.

pub use dyntitle_app as app;
pub use dyntitle_domain as domain;
pub use dyntitle_infra as infra;
pub use dyntitle_ui as ui;

pub mod error;
