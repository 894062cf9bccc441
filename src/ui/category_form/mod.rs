mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_category_form;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{CategoryFormState, FormMode, FormSubmission, SubmitError, MAX_NAME_LEN};
