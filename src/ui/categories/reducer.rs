//! Reducer for the category collection.

use crate::ui::mvi::Reducer;

use super::intent::CategoryIntent;
use super::state::CategoryState;

/// Pure transitions for [`CategoryState`].
///
/// Update and delete with an id that is not present are no-ops: the input
/// state is handed back untouched.
pub struct CategoryReducer;

impl Reducer for CategoryReducer {
    type State = CategoryState;
    type Intent = CategoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CategoryIntent::SetCategories { list } => CategoryState {
                categories: list,
                ..state
            },

            CategoryIntent::AddCategory { category } => {
                let mut categories = state.categories;
                categories.push(category);
                CategoryState {
                    categories,
                    ..state
                }
            }

            CategoryIntent::UpdateCategory { id, category } => match state.position(&id) {
                Some(index) => {
                    let mut categories = state.categories;
                    categories[index] = category;
                    CategoryState {
                        categories,
                        ..state
                    }
                }
                None => state,
            },

            CategoryIntent::DeleteCategory { id } => match state.position(&id) {
                Some(index) => {
                    let mut categories = state.categories;
                    categories.remove(index);
                    CategoryState {
                        categories,
                        ..state
                    }
                }
                None => state,
            },

            CategoryIntent::SetLoading { flag } => CategoryState {
                is_loading: flag,
                ..state
            },
        }
    }
}
