mod tokio_host;

pub use tokio_host::TokioHost;
