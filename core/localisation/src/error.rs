use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalisationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Script(#[from] pdxscript::ScriptError),
}

pub type Result<T> = std::result::Result<T, LocalisationError>;
