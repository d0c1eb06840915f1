#![forbid(unsafe_code)]

pub mod decode;
pub mod error;
pub mod hex;
pub mod list;
pub mod table;

// Re-exports: stable API surface
pub use decode::{BitResult, DecodeReport, decode};
pub use error::{FlagError, Result};
pub use list::list_types;
pub use table::FlagTable;
