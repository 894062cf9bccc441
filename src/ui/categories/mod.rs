//! Category collection slice: intents, state, reducer, async dispatchers
//! and the table view that reads it.

mod effects;
mod intent;
mod reducer;
mod screen;
mod state;

pub use effects::{create_category, edit_category, fetch_all_categories, remove_category};
pub use intent::{
    add_category, delete_category, set_categories, set_loading, update_category, CategoryIntent,
};
pub use reducer::CategoryReducer;
pub use screen::render_category_table;
pub use state::CategoryState;
