use crate::bank::SearchTerm;
use crate::error::TriviaError;
use crate::server::extract::{PathId, RequestedPage, TriviaJson};
use crate::server::router::TriviaState;
use crate::store::NewQuestion;
use axum::{Json, extract::State};
use trivia_schema::{
    CreateQuestionRequest, CreatedResponse, DeletedResponse, QuestionListResponse, SearchRequest,
    SearchResponse,
};

/// GET /questions?page=N
///
/// `totalQuestions` counts the questions on this page.
pub async fn list_questions(
    State(state): State<TriviaState>,
    RequestedPage(window): RequestedPage,
) -> Result<Json<QuestionListResponse>, TriviaError> {
    let page = state.bank.questions_page(window).await?;
    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: page.questions.len(),
        questions: page.questions,
        categories: page.categories,
        current_category: None,
    }))
}

/// POST /questions
pub async fn create_question(
    State(state): State<TriviaState>,
    TriviaJson(req): TriviaJson<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, TriviaError> {
    let question = NewQuestion::try_from(req)?;
    let created = state.bank.create_question(question).await?;
    Ok(Json(CreatedResponse {
        success: true,
        created,
    }))
}

/// DELETE /questions/{question_id}
pub async fn delete_question(
    State(state): State<TriviaState>,
    PathId(question_id): PathId,
) -> Result<Json<DeletedResponse>, TriviaError> {
    state.bank.delete_question(question_id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

/// POST /questions/search
///
/// A missing or empty `searchTerm` is a 404.
pub async fn search_questions(
    State(state): State<TriviaState>,
    TriviaJson(req): TriviaJson<SearchRequest>,
) -> Result<Json<SearchResponse>, TriviaError> {
    let term = req
        .search_term
        .and_then(SearchTerm::new)
        .ok_or(TriviaError::MissingSearchTerm)?;

    let questions = state.bank.search(&term).await?;
    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}
