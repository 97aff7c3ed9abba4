use std::sync::OnceLock;

use regex::Regex;

use crate::tagset::TagSet;

/// Keys that only appear inside decision blocks, never inside decision
/// category blocks. The grammar does not distinguish the two at shallow
/// depth, so nested keys are the only tell.
pub const DECISION_HINTS: [&str; 7] = [
    "available",
    "visible",
    "fire_only_once",
    "cost",
    "days_remove",
    "remove_effect",
    "complete_effect",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    NationalFocus,
    Event,
    Ideas,
    Decisions,
}

impl FileKind {
    pub fn describe(&self) -> &'static str {
        match self {
            FileKind::NationalFocus => "national_focus",
            FileKind::Event => "event file",
            FileKind::Ideas => "ideas file",
            FileKind::Decisions => "decisions or decision_categories",
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub kind: Option<FileKind>,
    pub tags: Vec<String>,
}

fn block_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s|=\s?\{").unwrap())
}

fn focus_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^.*id ?=").unwrap())
}

fn event_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^.*(title|desc|name|text) ?=").unwrap())
}

/// Everything from the first `#` to the end of the line is a comment.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Braces are counted on the raw line, comments included, so that a line
/// which closes one block and opens another keeps the depth consistent.
fn brace_delta(raw: &str) -> i32 {
    raw.matches('{').count() as i32 - raw.matches('}').count() as i32
}

fn block_name(stripped: &str) -> String {
    block_name_re().replace_all(stripped, "").into_owned()
}

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Walk a focus/event/ideas/decisions file and collect every identifier
/// that needs a localisation entry, in first-seen order.
///
/// Depth tracking is a heuristic: unbalanced braces or braces inside
/// quoted strings silently skew the count and extraction degrades to
/// best effort.
pub fn scan_localisation_tags(lines: &[String]) -> ScanOutcome {
    let mut tags = TagSet::new();
    let mut kind: Option<FileKind> = None;
    let mut depth: i32 = 0;
    let mut is_decision = false;
    let mut candidates: Vec<String> = Vec::new();

    for raw in lines {
        let stripped = strip_comment(raw);
        if stripped.trim().is_empty() {
            depth += brace_delta(raw);
            continue;
        }

        if kind.is_none() {
            if stripped.contains("focus_tree") {
                kind = Some(FileKind::NationalFocus);
            } else if stripped.contains("add_namespace") {
                kind = Some(FileKind::Event);
            } else if stripped.contains("ideas") {
                kind = Some(FileKind::Ideas);
            } else if stripped.contains('{') {
                kind = Some(FileKind::Decisions);
            }
        }

        match kind {
            Some(FileKind::Decisions) => {
                if depth < 2 && stripped.contains('{') {
                    let tag = block_name(stripped);
                    if !is_decision && depth == 1 {
                        // Could be a decision or a nested category key;
                        // held back until a hint settles the file kind.
                        candidates.push(tag);
                    } else {
                        tags.insert(tag.clone());
                        tags.insert(format!("{tag}_desc"));
                    }
                }
                if !is_decision
                    && depth == 2
                    && DECISION_HINTS.iter().any(|hint| stripped.contains(hint))
                {
                    is_decision = true;
                    for candidate in candidates.drain(..) {
                        tags.insert(candidate.clone());
                        tags.insert(format!("{candidate}_desc"));
                    }
                }
            }
            Some(FileKind::NationalFocus) => {
                if depth == 2 && focus_id_re().is_match(stripped) {
                    let tag = without_whitespace(&focus_id_re().replace(stripped, ""));
                    tags.insert(tag.clone());
                    tags.insert(format!("{tag}_desc"));
                }
            }
            Some(FileKind::Ideas) => {
                if depth == 2 && stripped.contains('{') {
                    let tag = block_name(stripped);
                    tags.insert(tag.clone());
                    tags.insert(format!("{tag}_desc"));
                }
            }
            Some(FileKind::Event) => {
                if depth > 0 && depth < 3 && event_key_re().is_match(stripped) {
                    let tag = without_whitespace(&event_key_re().replace(stripped, ""));
                    tags.insert(tag);
                }
            }
            None => {}
        }

        depth += brace_delta(raw);
    }

    ScanOutcome {
        kind,
        tags: tags.into_vec(),
    }
}

/// Collect the sprite-relevant names of an ideas file: every idea block
/// name at depth 2 plus every nested `picture =` value.
pub fn scan_idea_pictures(lines: &[String]) -> Vec<String> {
    let mut tags = TagSet::new();
    let mut depth: i32 = 0;

    for raw in lines {
        let line = strip_comment(raw).trim().to_owned();
        if line.is_empty() {
            depth += brace_delta(raw);
            continue;
        }

        if depth == 2 && line.contains('{') {
            let name = block_name(&line);
            if !name.is_empty() {
                tags.insert(name);
            }
        } else if depth > 2 && (line.contains("picture =") || line.contains("picture=")) {
            if let Some(value) = line.rsplit('=').next() {
                let value = value.trim();
                if !value.is_empty() {
                    tags.insert(value);
                }
            }
        }

        depth += brace_delta(raw);
    }

    tags.into_vec()
}
