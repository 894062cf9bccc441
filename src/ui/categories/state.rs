//! Store state for the category collection.

use crate::api::{Category, CategoryId};
use crate::ui::mvi::UiState;

/// The category collection as last reported by the service.
///
/// Order is the service's listing order; ids are unique once assigned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryState {
    pub categories: Vec<Category>,
    pub is_loading: bool,
}

impl UiState for CategoryState {}

impl CategoryState {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories,
            is_loading: false,
        }
    }

    pub fn position(&self, id: &CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| c.has_id(id))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
