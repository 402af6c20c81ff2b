use trivia_schema::Question;

/// A non-empty search term, matched literally and case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// `None` for an empty term. Whitespace is significant and kept as-is.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return None;
        }
        let folded = raw.to_lowercase();
        Some(Self { raw, folded })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }
}

/// Questions whose text contains `term`, in input order.
pub fn search(items: &[Question], term: &SearchTerm) -> Vec<Question> {
    items
        .iter()
        .filter(|q| term.matches(&q.question))
        .cloned()
        .collect()
}
