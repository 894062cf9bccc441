use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{CategoryFormState, FormMode, MAX_NAME_LEN};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = CategoryFormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenCreate => match state {
                CategoryFormState::Closed => CategoryFormState::Open {
                    mode: FormMode::Create,
                    name: String::new(),
                    submitting: false,
                },
                other => other,
            },
            FormIntent::OpenEdit { category } => match state {
                CategoryFormState::Closed => CategoryFormState::Open {
                    mode: FormMode::Edit(category),
                    name: String::new(),
                    submitting: false,
                },
                other => other,
            },
            FormIntent::Input { ch } => match state {
                CategoryFormState::Open {
                    mode,
                    mut name,
                    submitting: false,
                } => {
                    if !ch.is_control() && name.chars().count() < MAX_NAME_LEN {
                        name.push(ch);
                    }
                    CategoryFormState::Open {
                        mode,
                        name,
                        submitting: false,
                    }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                CategoryFormState::Open {
                    mode,
                    mut name,
                    submitting: false,
                } => {
                    name.pop();
                    CategoryFormState::Open {
                        mode,
                        name,
                        submitting: false,
                    }
                }
                other => other,
            },
            FormIntent::Submit => match state {
                CategoryFormState::Open { mode, name, .. } => CategoryFormState::Open {
                    mode,
                    name,
                    submitting: true,
                },
                other => other,
            },
            FormIntent::SubmitFailed => match state {
                CategoryFormState::Open { mode, name, .. } => CategoryFormState::Open {
                    mode,
                    name,
                    submitting: false,
                },
                other => other,
            },
            // Closing drops the typed name, so the next open starts empty.
            FormIntent::Close => CategoryFormState::Closed,
        }
    }
}
