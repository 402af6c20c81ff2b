use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_schema::{Category, Question};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbCategory {
    pub id: i64,
    /// Stored in the `type` column.
    pub kind: String,
}

impl From<DbQuestion> for Question {
    fn from(row: DbQuestion) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

impl From<DbCategory> for Category {
    fn from(row: DbCategory) -> Self {
        Category {
            id: row.id,
            kind: row.kind,
        }
    }
}
