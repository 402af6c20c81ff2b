use trivia_schema::{Category, Question};

/// Questions of one category together with the resolved category record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    pub category_id: i64,
    pub category: Option<Category>,
    pub questions: Vec<Question>,
}

/// Predicate selecting the questions that belong to `category_id`.
pub fn in_category(category_id: i64) -> impl Fn(&Question) -> bool + Send + Sync + Copy {
    move |q: &Question| q.category == category_id
}

/// Exact-match filter on `category`. An unknown id is not an error here; the selection just
/// carries no category record.
pub fn by_category(
    items: &[Question],
    categories: &[Category],
    category_id: i64,
) -> CategorySelection {
    let matches = in_category(category_id);
    CategorySelection {
        category_id,
        category: categories.iter().find(|c| c.id == category_id).cloned(),
        questions: items.iter().filter(|&q| matches(q)).cloned().collect(),
    }
}
