use crate::lax::deserialize_opt_i64_lax;
use serde::{Deserialize, Serialize};

/// POST /questions
///
/// Every field is optional at the wire level so that presence can be checked explicitly and
/// reported as unprocessable instead of a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lax")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lax")]
    pub category: Option<i64>,
}

/// POST /questions/search
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// POST /quizzes
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_opt_i64_lax")]
    pub id: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
