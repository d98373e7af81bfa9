//! Reporter port implementations.

mod memory;

pub use memory::RecordingReporter;
