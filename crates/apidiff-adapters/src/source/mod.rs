//! Document source adapters.

mod file;
mod memory;

pub use file::{FileDocumentSource, STDIN_PATH};
pub use memory::MemoryDocumentSource;
