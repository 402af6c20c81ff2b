use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use thiserror::Error as ThisError;
use trivia_schema::{Question, QuizCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum QuizError {
    #[error("no candidate questions")]
    NoCandidates,
}

/// Outcome of a quiz draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw<'a> {
    Next(&'a Question),
    /// Every candidate has already been served in this session.
    Exhausted,
}

/// Which questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    /// Resolves the client's category choice. The all-categories sentinel type or id 0 selects
    /// every question; anything else needs an id.
    pub fn resolve(category: &QuizCategory, all_categories_type: &str) -> Option<Self> {
        if category.kind.as_deref() == Some(all_categories_type) || category.id == Some(0) {
            return Some(QuizScope::All);
        }
        category.id.map(QuizScope::Category)
    }
}

/// Picks a question uniformly among `candidates` whose id is not in `excluded`.
///
/// Filters first and draws once, so the call always terminates; a fully excluded pool is
/// reported as [`Draw::Exhausted`].
pub fn next_question<'a, R>(
    candidates: &'a [Question],
    excluded: &HashSet<i64>,
    rng: &mut R,
) -> Result<Draw<'a>, QuizError>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(QuizError::NoCandidates);
    }

    let eligible: Vec<&Question> = candidates
        .iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect();

    Ok(match eligible.choose(rng) {
        Some(&q) => Draw::Next(q),
        None => Draw::Exhausted,
    })
}
