use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

fn name_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^#:]+):").unwrap())
}

/// Keys already defined in a localisation file: a colon-terminated name
/// at line start. `#`-prefixed lines never match.
pub fn existing_keys(lines: &[String]) -> HashSet<String> {
    let mut keys = HashSet::new();
    for line in lines {
        if let Some(caps) = name_line_re().captures(line) {
            keys.insert(caps[1].trim().to_owned());
        }
    }
    keys
}

/// Required minus existing, preserving the required order.
pub fn missing_keys(required: &[String], existing: &HashSet<String>) -> Vec<String> {
    required
        .iter()
        .filter(|key| !existing.contains(key.as_str()))
        .cloned()
        .collect()
}

/// Render the appended block for the missing keys: one `#TODO` marker
/// ahead of the whole block, or one ahead of every entry.
pub fn render_entries(missing: &[String], todo_per_line: bool) -> Vec<String> {
    let mut out = vec![String::new()];
    if !todo_per_line {
        out.push(" #TODO".to_owned());
    }
    for key in missing {
        if todo_per_line {
            out.push(" #TODO".to_owned());
        }
        out.push(format!(" {key}:0 \"\""));
    }
    out
}
