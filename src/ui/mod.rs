//! Terminal host: renders the page and turns terminal events into actions.

pub use dyntitle_app as app;
pub use dyntitle_domain as domain;

pub mod adapters;
pub mod components;
pub mod event;
pub mod theme;
pub mod tui;
