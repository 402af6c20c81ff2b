use crate::error::TriviaError;
use crate::server::extract::PathId;
use crate::server::router::TriviaState;
use axum::{Json, extract::State};
use trivia_schema::{CategoriesResponse, CategoryQuestionsResponse};

/// GET /categories
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    let categories = state.bank.categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{category_id}/questions
pub async fn category_questions(
    State(state): State<TriviaState>,
    PathId(category_id): PathId,
) -> Result<Json<CategoryQuestionsResponse>, TriviaError> {
    let selection = state.bank.questions_in_category(category_id).await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: selection.questions.len(),
        questions: selection.questions,
        current_category: selection.category_id,
    }))
}
