use serde::{Deserialize, Serialize};

use super::label::group_label;
use crate::listing::{Grouped, Searchable};

/// Folder for documents published without a category.
pub const UNLABELED_CATEGORY: &str = "General";

/// One downloadable document. Two independent instances of this category
/// exist: official documents and form downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub file_url: String,
    #[serde(default)]
    pub upload_date: String,
}

impl Document {
    pub fn category_label(&self) -> &str {
        group_label(self.category.as_deref(), UNLABELED_CATEGORY)
    }
}

impl Searchable for Document {
    fn haystack(&self) -> String {
        format!("{} {}", self.title, self.category_label())
    }
}

impl Grouped for Document {
    fn group(&self) -> &str {
        self.category_label()
    }
}
