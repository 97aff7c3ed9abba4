use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::keys::{existing_keys, missing_keys, render_entries};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const LOCALE_HEADER: &str = "l_english:";

/// Scan a script file for localisation tags and append every key the
/// destination does not define yet.
pub fn add_localisation(input: &Path, output: &Path, todo_per_line: bool) -> Result<()> {
    let input_lines = pdxscript::read_lines(input)?;
    let outcome = pdxscript::scan_localisation_tags(&input_lines);
    if let Some(kind) = outcome.kind {
        println!("File {} detected as {}.", input.display(), kind.describe());
    }
    println!("File {} read successfully!", input.display());

    let mut output_lines = pdxscript::read_lines_or_empty(output)?;
    if output_lines.is_empty() {
        println!(
            "Output file {} is empty or missing; creating a new l_english stub.",
            output.display()
        );
        // The game expects localisation files to start with a BOM.
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(LOCALE_HEADER.as_bytes());
        bytes.push(b'\n');
        fs::write(output, bytes)?;
        output_lines = vec![LOCALE_HEADER.to_owned()];
    }

    let existing = existing_keys(&output_lines);
    let missing = missing_keys(&outcome.tags, &existing);
    if missing.is_empty() {
        println!("No new localisation keys were required.");
        return Ok(());
    }

    let rendered = render_entries(&missing, todo_per_line);
    let mut file = OpenOptions::new().append(true).create(true).open(output)?;
    file.write_all((rendered.join("\n") + "\n").as_bytes())?;
    println!(
        "Appended {} lines to output file {} successfully!",
        missing.len(),
        output.display()
    );
    Ok(())
}
