pub mod error;
pub mod keys;
pub mod process;

pub use error::{LocalisationError, Result};
pub use keys::{existing_keys, missing_keys, render_entries};
