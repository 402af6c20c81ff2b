pub mod error;
pub mod lax;
pub mod record;
pub mod request;
pub mod response;

pub use error::ErrorBody;
pub use record::{Category, CategoryMap, Question};
pub use request::{CreateQuestionRequest, QuizCategory, QuizRequest, SearchRequest};
pub use response::{
    CategoriesResponse, CategoryQuestionsResponse, CreatedResponse, DeletedResponse,
    QuestionListResponse, QuizResponse, SearchResponse,
};
