//! Question bank: pagination, search, category filtering and quiz draws over a record store.
//!
//! The operations in the submodules are pure functions over explicit inputs. `QuestionBank`
//! fetches the records each action needs from the injected store, runs exactly one operation
//! and classifies failures for the HTTP layer.

mod category;
mod paginate;
mod quiz;
mod search;

pub use category::{CategorySelection, by_category, in_category};
pub use paginate::{DEFAULT_PAGE_SIZE, PageWindow, paginate};
pub use quiz::{Draw, QuizError, QuizScope, next_question};
pub use search::{SearchTerm, search};

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info};
use trivia_schema::{Category, CategoryMap, Question, QuizCategory};

use crate::config::BankConfig;
use crate::error::TriviaError;
use crate::store::{NewQuestion, RecordStore};

/// One page of questions plus the full category mapping.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub categories: CategoryMap,
}

#[derive(Clone)]
pub struct QuestionBank {
    store: Arc<dyn RecordStore>,
    page_size: NonZeroUsize,
    all_categories_type: Arc<str>,
}

impl QuestionBank {
    pub fn new(store: Arc<dyn RecordStore>, cfg: &BankConfig) -> Self {
        Self {
            store,
            page_size: cfg.page_size,
            all_categories_type: Arc::from(cfg.all_categories_type.as_str()),
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub async fn categories(&self) -> Result<CategoryMap, TriviaError> {
        let categories = self.store.list_categories().await?;
        if categories.is_empty() {
            return Err(TriviaError::NoCategories);
        }
        Ok(Category::to_map(&categories))
    }

    pub async fn questions_page(&self, window: PageWindow) -> Result<QuestionPage, TriviaError> {
        let all = self.store.list_questions().await?;
        let questions = paginate(&all, window).to_vec();
        if questions.is_empty() {
            debug!(
                page = window.page(),
                total = all.len(),
                "requested page is past the end"
            );
            return Err(TriviaError::EmptyPage {
                page: window.page(),
            });
        }

        let categories = self.store.list_categories().await?;
        Ok(QuestionPage {
            questions,
            categories: Category::to_map(&categories),
        })
    }

    pub async fn create_question(&self, question: NewQuestion) -> Result<i64, TriviaError> {
        let category = question.category;
        let id = self
            .store
            .insert_question(question)
            .await
            .map_err(|e| TriviaError::Unprocessable(e.to_string()))?;
        info!(id, category, "question created");
        Ok(id)
    }

    /// Any failure, including a missing record, reads as not-found.
    pub async fn delete_question(&self, id: i64) -> Result<(), TriviaError> {
        let lookup = self.store.get_question(id).await;
        let removed = match lookup {
            Ok(Some(_)) => self.store.delete_question(id).await,
            Ok(None) => Err(TriviaError::QuestionNotFound(id)),
            Err(e) => Err(e),
        };
        removed.map_err(|e| {
            debug!(id, error = %e, "delete failed");
            TriviaError::QuestionNotFound(id)
        })?;
        info!(id, "question deleted");
        Ok(())
    }

    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, TriviaError> {
        let all = self.store.list_questions().await?;
        let found = search(&all, term);
        debug!(term = term.as_str(), matches = found.len(), "search");
        Ok(found)
    }

    /// Unknown categories and known-but-empty categories are both not-found, with different
    /// errors so the response message tells them apart.
    pub async fn questions_in_category(
        &self,
        category_id: i64,
    ) -> Result<CategorySelection, TriviaError> {
        let (questions, categories) = tokio::try_join!(
            self.store.list_questions(),
            self.store.list_categories()
        )
        .map_err(TriviaError::into_unprocessable)?;

        let selection = by_category(&questions, &categories, category_id);
        if selection.questions.is_empty() {
            return Err(match selection.category {
                None => TriviaError::UnknownCategory(category_id),
                Some(_) => TriviaError::EmptyCategory(category_id),
            });
        }
        Ok(selection)
    }

    pub fn quiz_scope(&self, category: &QuizCategory) -> Result<QuizScope, TriviaError> {
        QuizScope::resolve(category, &self.all_categories_type)
            .ok_or(TriviaError::MissingField("quiz_category.id"))
    }

    /// `Ok(None)` once every candidate has been served.
    pub async fn next_quiz_question(
        &self,
        scope: QuizScope,
        previous_questions: &[i64],
    ) -> Result<Option<Question>, TriviaError> {
        let candidates = match scope {
            QuizScope::All => self.store.list_questions().await,
            QuizScope::Category(id) => self.store.filter_questions(&in_category(id)).await,
        }
        .map_err(TriviaError::into_unprocessable)?;

        let excluded: HashSet<i64> = previous_questions.iter().copied().collect();
        let draw = {
            let mut rng = rand::rng();
            next_question(&candidates, &excluded, &mut rng)?
        };

        match draw {
            Draw::Next(q) => Ok(Some(q.clone())),
            Draw::Exhausted => {
                debug!(
                    ?scope,
                    served = excluded.len(),
                    "quiz exhausted for scope"
                );
                Ok(None)
            }
        }
    }
}
