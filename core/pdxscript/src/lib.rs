pub mod error;
pub mod read;
pub mod scanner;
pub mod tagset;

pub use error::{Result, ScriptError};
pub use read::{read_lines, read_lines_or_empty, read_text};
pub use scanner::{FileKind, ScanOutcome, scan_idea_pictures, scan_localisation_tags};
pub use tagset::TagSet;
