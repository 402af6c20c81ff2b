use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use trivia_schema::{Category, Question};

use super::{NewQuestion, RecordStore};
use crate::error::TriviaError;

#[derive(Debug, Default)]
struct MemoryState {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_question_id: i64,
}

/// In-process record store. Ids are assigned monotonically and never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(
        categories: impl IntoIterator<Item = Category>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let categories: BTreeMap<i64, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();
        let questions: BTreeMap<i64, Question> =
            questions.into_iter().map(|q| (q.id, q)).collect();
        let last_question_id = questions.keys().next_back().copied().unwrap_or_default();

        Self {
            state: RwLock::new(MemoryState {
                categories,
                questions,
                last_question_id,
            }),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, TriviaError> {
        Ok(self.state.read().await.questions.values().cloned().collect())
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, TriviaError> {
        Ok(self.state.read().await.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<i64, TriviaError> {
        let mut state = self.state.write().await;
        if !state.categories.contains_key(&question.category) {
            return Err(TriviaError::UnknownCategory(question.category));
        }
        state.last_question_id += 1;
        let id = state.last_question_id;
        state.questions.insert(id, question.with_id(id));
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<(), TriviaError> {
        self.state
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(TriviaError::QuestionNotFound(id))
    }
}
