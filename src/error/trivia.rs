use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use thiserror::Error as ThisError;
use tracing::{debug, error};
use trivia_schema::ErrorBody;

use crate::bank::QuizError;

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("No categories available")]
    NoCategories,

    #[error("Page {page} holds no questions")]
    EmptyPage { page: usize },

    #[error("Question {0} not found")]
    QuestionNotFound(i64),

    #[error("Category {0} does not exist")]
    UnknownCategory(i64),

    #[error("Category {0} has no questions")]
    EmptyCategory(i64),

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Missing or empty search term")]
    MissingSearchTerm,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("No quiz questions available for the chosen category")]
    NoQuizCandidates,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Invalid page number: {0}")]
    InvalidPage(i64),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl TriviaError {
    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::NoCategories
            | TriviaError::EmptyPage { .. }
            | TriviaError::QuestionNotFound(_)
            | TriviaError::UnknownCategory(_)
            | TriviaError::EmptyCategory(_)
            | TriviaError::RouteNotFound(_)
            | TriviaError::MissingSearchTerm => StatusCode::NOT_FOUND,

            TriviaError::MissingField(_)
            | TriviaError::NoQuizCandidates
            | TriviaError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,

            TriviaError::InvalidPage(_) | TriviaError::BadRequest(_) => StatusCode::BAD_REQUEST,

            TriviaError::DatabaseError(_)
            | TriviaError::RactorError(_)
            | TriviaError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short, stable message placed in the response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            TriviaError::UnknownCategory(_) => "category not found",
            _ => match self.status() {
                StatusCode::NOT_FOUND => "not found",
                StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
                StatusCode::BAD_REQUEST => "bad request",
                _ => "internal server error",
            },
        }
    }

    /// Store failures become 422 for actions where the store rejecting the operation is a
    /// request problem (writes, scoped reads). Already-classified errors pass through.
    pub fn into_unprocessable(self) -> Self {
        match self {
            TriviaError::DatabaseError(_)
            | TriviaError::RactorError(_)
            | TriviaError::UnexpectedError(_) => TriviaError::Unprocessable(self.to_string()),
            other => other,
        }
    }
}

/// Well-formed JSON of the wrong shape is unprocessable; anything else about the body
/// (syntax, content type, size) is a bad request.
impl From<JsonRejection> for TriviaError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => TriviaError::Unprocessable(e.body_text()),
            other => TriviaError::BadRequest(other.body_text()),
        }
    }
}

impl From<QuizError> for TriviaError {
    fn from(e: QuizError) -> Self {
        match e {
            QuizError::NoCandidates => TriviaError::NoQuizCandidates,
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = ErrorBody::new(status.as_u16(), self.public_message());
        (status, Json(body)).into_response()
    }
}
