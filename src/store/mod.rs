//! Record store: the persistence collaborator behind the question bank.
//!
//! Implementations:
//! - `memory::MemoryStore`: process-local maps, used for embedding and tests
//! - `crate::db::DbActorHandle`: SQLite through the database actor

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use trivia_schema::{Category, CreateQuestionRequest, Question};

use crate::error::TriviaError;

/// A validated question ready for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = TriviaError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            question: req.question.ok_or(TriviaError::MissingField("question"))?,
            answer: req.answer.ok_or(TriviaError::MissingField("answer"))?,
            difficulty: req.difficulty.ok_or(TriviaError::MissingField("difficulty"))?,
            category: req.category.ok_or(TriviaError::MissingField("category"))?,
        })
    }
}

impl NewQuestion {
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All categories, ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, TriviaError>;

    /// All questions, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, TriviaError>;

    async fn filter_questions(
        &self,
        predicate: &(dyn for<'q> Fn(&'q Question) -> bool + Sync),
    ) -> Result<Vec<Question>, TriviaError> {
        let mut questions = self.list_questions().await?;
        questions.retain(|q| predicate(q));
        Ok(questions)
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, TriviaError>;

    /// Returns the new id. Fails if the category does not exist.
    ///
    /// Ids are never reused, even after a delete: quiz clients exclude questions by id.
    async fn insert_question(&self, question: NewQuestion) -> Result<i64, TriviaError>;

    /// Fails with `QuestionNotFound` when nothing was deleted.
    async fn delete_question(&self, id: i64) -> Result<(), TriviaError>;
}
