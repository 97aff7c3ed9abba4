use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File '{0}' was not found")]
    NotFound(PathBuf),
    #[error("Could not decode '{0}' using UTF-8 or WINDOWS-1252")]
    Decode(PathBuf),
}

pub type Result<T> = std::result::Result<T, ScriptError>;
