use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single trivia question as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category id -> type, serialized as a JSON object keyed by the id.
pub type CategoryMap = BTreeMap<i64, String>;

impl Category {
    pub fn to_map<'a, I>(categories: I) -> CategoryMap
    where
        I: IntoIterator<Item = &'a Category>,
    {
        categories
            .into_iter()
            .map(|c| (c.id, c.kind.clone()))
            .collect()
    }
}
