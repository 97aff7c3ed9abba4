pub mod error;
pub mod process;

use std::sync::OnceLock;

use regex::{Captures, Regex};

pub use error::{Result, StateError};

fn manpower_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"manpower\s*=\s*(\d+)").unwrap())
}

/// Rewrite every `manpower = <int>` with the truncated product. The flag
/// is true only when at least one value actually changed.
pub fn multiply_manpower(text: &str, multiplier: f64) -> (String, bool) {
    let mut changed = false;
    let updated = manpower_re().replace_all(text, |caps: &Captures| {
        let Ok(value) = caps[1].parse::<u64>() else {
            return caps[0].to_owned();
        };
        let new_value = (value as f64 * multiplier) as u64;
        if new_value != value {
            changed = true;
        }
        format!("manpower = {new_value}")
    });
    (updated.into_owned(), changed)
}
