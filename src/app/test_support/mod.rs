mod manual_host;

pub use manual_host::ManualHost;
