use std::collections::HashSet;

/// Insertion-ordered set of extracted tags. Uniqueness is enforced on
/// insert; iteration preserves first-seen order.
#[derive(Debug, Default)]
pub struct TagSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the tag was not already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.seen.contains(&tag) {
            return false;
        }
        self.seen.insert(tag.clone());
        self.order.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}
