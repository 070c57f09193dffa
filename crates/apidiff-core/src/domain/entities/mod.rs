pub mod source_file;
pub mod symbol;

pub use source_file::SourceFile;
pub use symbol::{Symbol, SymbolBuilder, Walk};
