//! Intents for the category collection, plus their builders.

use crate::api::{Category, CategoryId};
use crate::ui::mvi::Intent;

/// State deltas for the category collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryIntent {
    /// Replace the whole collection, keeping the given order.
    SetCategories { list: Vec<Category> },

    /// Append one category at the end.
    AddCategory { category: Category },

    /// Replace the entry with this id, in place.
    UpdateCategory { id: CategoryId, category: Category },

    /// Remove the entry with this id.
    DeleteCategory { id: CategoryId },

    /// Set the loading indicator.
    SetLoading { flag: bool },
}

impl Intent for CategoryIntent {}

pub fn set_categories(list: Vec<Category>) -> CategoryIntent {
    CategoryIntent::SetCategories { list }
}

pub fn add_category(category: Category) -> CategoryIntent {
    CategoryIntent::AddCategory { category }
}

pub fn update_category(id: CategoryId, category: Category) -> CategoryIntent {
    CategoryIntent::UpdateCategory { id, category }
}

pub fn delete_category(id: CategoryId) -> CategoryIntent {
    CategoryIntent::DeleteCategory { id }
}

pub fn set_loading(flag: bool) -> CategoryIntent {
    CategoryIntent::SetLoading { flag }
}
