pub mod config_store;
pub mod host;
pub mod host_document;
pub mod renderer;

pub use config_store::{ConfigStore, ConfigStoreError};
pub use host::{Host, Job, ReadyCallback};
pub use host_document::{HostDocument, HostDocumentError, SharedDocument};
pub use renderer::Renderer;

#[cfg(test)]
pub use host_document::MockHostDocument;
#[cfg(test)]
pub use renderer::MockRenderer;
