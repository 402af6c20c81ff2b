use crate::error::TriviaError;
use crate::server::extract::TriviaJson;
use crate::server::router::TriviaState;
use axum::{Json, extract::State};
use trivia_schema::{QuizRequest, QuizResponse};

/// POST /quizzes
///
/// Draws a question not listed in `previous_questions`. When the category has nothing left,
/// the response is successful with `question: null`.
pub async fn next_quiz_question(
    State(state): State<TriviaState>,
    TriviaJson(req): TriviaJson<QuizRequest>,
) -> Result<Json<QuizResponse>, TriviaError> {
    let previous_questions = req
        .previous_questions
        .ok_or(TriviaError::MissingField("previous_questions"))?;
    let quiz_category = req
        .quiz_category
        .ok_or(TriviaError::MissingField("quiz_category"))?;

    let scope = state.bank.quiz_scope(&quiz_category)?;
    let question = state
        .bank
        .next_quiz_question(scope, &previous_questions)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
