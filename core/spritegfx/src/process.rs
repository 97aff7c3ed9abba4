use std::fs;
use std::path::Path;

use crate::error::{GfxError, Result};
use crate::insert::{has_sprite, insert_before_close};
use crate::templates::{shine_sprite, simple_sprite};

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.join("\n") + "\n")?;
    Ok(())
}

/// Add `GFX_<icon>` to the goals file and `GFX_<icon>_shine` to the
/// goals_shine file. Each file is handled independently; a failure on one
/// is reported and does not stop the other.
pub fn add_focus_sprites(
    directory: &Path,
    icon_name: &str,
    goals: &str,
    goals_shine: &str,
) -> Result<()> {
    if !directory.is_dir() {
        return Err(GfxError::NotADirectory(directory.to_path_buf()));
    }

    let texture = format!("gfx/interface/goals/{icon_name}.dds");
    let sprite = format!("GFX_{icon_name}");
    let shine = format!("GFX_{icon_name}_shine");
    let jobs = [
        (directory.join(goals), sprite.clone(), simple_sprite(&sprite, &texture)),
        (directory.join(goals_shine), shine.clone(), shine_sprite(&shine, icon_name)),
    ];

    let mut failures = 0;
    for (path, sprite_name, block) in jobs {
        match add_sprite_to_file(&path, &sprite_name, block) {
            Ok(true) => println!("Added {sprite_name} to {}.", path.display()),
            Ok(false) => println!(
                "Sprite {sprite_name} already present in {}, skipping.",
                path.display()
            ),
            Err(e) => {
                eprintln!("Failed to update {}: {e}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(GfxError::Partial(failures));
    }
    Ok(())
}

fn add_sprite_to_file(path: &Path, sprite_name: &str, block: Vec<String>) -> Result<bool> {
    let mut lines = pdxscript::read_lines(path)?;
    if has_sprite(&lines, sprite_name) {
        return Ok(false);
    }
    insert_before_close(&mut lines, &block);
    write_lines(path, &lines)?;
    Ok(true)
}

/// Scan an ideas file and add a sprite entry for every idea picture that
/// the gfx file does not yet define. A missing gfx file starts from a
/// two-line `spriteTypes` skeleton.
pub fn add_idea_sprites(
    idea_file: &Path,
    gfx_file: &Path,
    icon_directory: &str,
    icon_format: &str,
    no_prefix: bool,
) -> Result<()> {
    println!("Reading file {}...", idea_file.display());
    let idea_lines = pdxscript::read_lines(idea_file)?;
    let pictures = pdxscript::scan_idea_pictures(&idea_lines);
    println!(
        "File {} read successfully, {} unique idea pictures found.",
        idea_file.display(),
        pictures.len()
    );

    let mut lines = load_gfx_lines(gfx_file)?;
    let prefix = if no_prefix { "" } else { "idea_" };
    let subdir = if icon_directory.is_empty() {
        String::new()
    } else {
        format!("/{}", icon_directory.trim_matches('/'))
    };

    let mut added = 0;
    for picture in &pictures {
        let sprite_name = format!("GFX_idea_{picture}");
        if has_sprite(&lines, &sprite_name) {
            continue;
        }
        let texture = format!("gfx/interface/ideas{subdir}/{prefix}{picture}.{icon_format}");
        insert_before_close(&mut lines, &simple_sprite(&sprite_name, &texture));
        added += 1;
    }

    write_lines(gfx_file, &lines)?;
    println!(
        "GFX file {} updated successfully; added {added} new entries.",
        gfx_file.display()
    );
    Ok(())
}

fn load_gfx_lines(path: &Path) -> Result<Vec<String>> {
    let lines = pdxscript::read_lines_or_empty(path)?;
    if lines.is_empty() {
        return Ok(vec!["spriteTypes = {".to_owned(), "}".to_owned()]);
    }
    Ok(lines)
}
