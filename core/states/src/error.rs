use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input '{0}' was not found")]
    NotFound(PathBuf),
    #[error("{0} file(s) could not be processed")]
    Partial(usize),
}

pub type Result<T> = std::result::Result<T, StateError>;
