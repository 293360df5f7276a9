//! Infrastructure layer: config file, tokio host and logging.

pub use dyntitle_app as app;
pub use dyntitle_domain as domain;

pub mod adapters;
pub mod config;
pub mod host;
pub mod logging;
