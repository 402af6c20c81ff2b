use crate::server::router::TriviaState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub mod categories;
pub mod questions;
pub mod quizzes;

pub fn router() -> Router<TriviaState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(categories::category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{question_id}", delete(questions::delete_question))
        .route("/questions/search", post(questions::search_questions))
        .route("/quizzes", post(quizzes::next_quiz_question))
}
