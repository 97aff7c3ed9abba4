use regex::Regex;

/// Presence check for a sprite, keyed on its quoted name line.
pub fn has_sprite(lines: &[String], sprite_name: &str) -> bool {
    let pattern = Regex::new(&format!(
        r#"name\s*=\s*"{}""#,
        regex::escape(sprite_name)
    ))
    .unwrap();
    lines.iter().any(|line| pattern.is_match(line))
}

/// Splice a block immediately before the last line that begins with a
/// closing brace. Files without one get the block appended instead.
pub fn insert_before_close(lines: &mut Vec<String>, block: &[String]) {
    let at = lines
        .iter()
        .rposition(|line| line.trim_start().starts_with('}'))
        .unwrap_or(lines.len());
    lines.splice(at..at, block.iter().cloned());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn finds_sprite_by_quoted_name() {
        let file = lines(&[
            "spriteTypes = {",
            "\tSpriteType = {",
            "\t\tname = \"GFX_army_effort\"",
            "\t}",
            "}",
        ]);
        assert!(has_sprite(&file, "GFX_army_effort"));
        assert!(!has_sprite(&file, "GFX_army"));
    }

    #[test]
    fn inserts_before_final_close() {
        let mut file = lines(&["spriteTypes = {", "\told = 1", "}"]);
        insert_before_close(&mut file, &lines(&["\tnew = 2"]));
        assert_eq!(file, lines(&["spriteTypes = {", "\told = 1", "\tnew = 2", "}"]));
    }

    #[test]
    fn inserts_before_last_closing_line_not_first() {
        let mut file = lines(&[
            "spriteTypes = {",
            "\tSpriteType = {",
            "\t}",
            "}",
        ]);
        insert_before_close(&mut file, &lines(&["\tx"]));
        assert_eq!(file[3], "\tx");
        assert_eq!(file[4], "}");
    }

    #[test]
    fn appends_when_no_closing_brace_exists() {
        let mut file = lines(&["just text"]);
        insert_before_close(&mut file, &lines(&["block"]));
        assert_eq!(file, lines(&["just text", "block"]));
    }
}
