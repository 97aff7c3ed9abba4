pub mod error;
pub mod insert;
pub mod process;
pub mod templates;

pub use error::{GfxError, Result};
pub use insert::{has_sprite, insert_before_close};
pub use templates::{shine_sprite, simple_sprite};
