pub mod net;
pub mod tracing;
