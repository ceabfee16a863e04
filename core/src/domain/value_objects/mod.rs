//! Value objects representing immutable domain concepts.

pub mod envelope;
pub mod status;

// Re-export commonly used types
pub use envelope::MessageEnvelope;
pub use status::{ReadStatus, Visibility};
