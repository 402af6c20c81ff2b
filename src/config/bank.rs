use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::bank::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BankConfig {
    /// Questions per page on `GET /questions`.
    /// TOML: `bank.page_size`. Default: `10`. Must be at least 1.
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,

    /// Quiz category type that means "every category".
    /// TOML: `bank.all_categories_type`. Default: `click`.
    #[serde(default = "default_all_categories_type")]
    pub all_categories_type: String,

    /// Category names inserted at startup when missing. Empty disables seeding.
    /// TOML: `bank.seed_categories`.
    #[serde(default = "default_seed_categories")]
    pub seed_categories: Vec<String>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            all_categories_type: default_all_categories_type(),
            seed_categories: default_seed_categories(),
        }
    }
}

fn default_page_size() -> NonZeroUsize {
    DEFAULT_PAGE_SIZE
}

fn default_all_categories_type() -> String {
    "click".to_string()
}

fn default_seed_categories() -> Vec<String> {
    [
        "Science",
        "Art",
        "Geography",
        "History",
        "Entertainment",
        "Sports",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
