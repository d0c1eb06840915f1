use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(String),

    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    Argument(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, FlagError>;
