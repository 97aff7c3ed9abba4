use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GfxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Script(#[from] pdxscript::ScriptError),
    #[error("Directory '{0}' was not found or is not accessible")]
    NotADirectory(PathBuf),
    #[error("{0} file(s) could not be updated")]
    Partial(usize),
}

pub type Result<T> = std::result::Result<T, GfxError>;
