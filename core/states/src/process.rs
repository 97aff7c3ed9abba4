use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StateError};
use crate::multiply_manpower;

/// Multiply manpower values in a state history file, or in every `*.txt`
/// directly inside a directory. Files are processed independently; only
/// files whose values actually change are rewritten and reported.
pub fn scale_manpower(input: &Path, multiplier: f64) -> Result<()> {
    if !input.exists() {
        return Err(StateError::NotFound(input.to_path_buf()));
    }

    let mut updated = 0;
    let mut failures = 0;
    for path in state_files(input) {
        match process_file(&path, multiplier) {
            Ok(true) => {
                println!("Updated {}", path.display());
                updated += 1;
            }
            Ok(false) => {}
            Err(e) => {
                eprintln!("Failed to process {}: {e}", path.display());
                failures += 1;
            }
        }
    }
    println!("Finished, {updated} state files updated.");

    if failures > 0 {
        return Err(StateError::Partial(failures));
    }
    Ok(())
}

/// Non-recursive, sorted by file name for a deterministic log order.
fn state_files(input: &Path) -> Vec<PathBuf> {
    if !input.is_dir() {
        return vec![input.to_path_buf()];
    }
    WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect()
}

fn process_file(path: &Path, multiplier: f64) -> Result<bool> {
    let text = fs::read_to_string(path)?;
    let (updated, changed) = multiply_manpower(&text, multiplier);
    if changed {
        fs::write(path, updated)?;
    }
    Ok(changed)
}
