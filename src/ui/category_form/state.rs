use thiserror::Error;

use crate::api::{Category, CategoryId, NewCategory};
use crate::ui::mvi::UiState;

/// Longest name the form accepts.
pub const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(Category),
}

/// Modal create/edit form. Local to the screen, never part of store state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryFormState {
    #[default]
    Closed,
    Open {
        mode: FormMode,
        name: String,
        submitting: bool,
    },
}

impl UiState for CategoryFormState {}

/// What the form asks the service to do on submit.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    Create(NewCategory),
    Edit { id: CategoryId, category: Category },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Form is not open")]
    NotOpen,
    #[error("Name must not be empty")]
    BlankName,
    #[error("Category has not been saved yet")]
    MissingId,
}

impl CategoryFormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Open { submitting: true, .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Open { name, .. } => name,
            Self::Closed => "",
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Open {
                mode: FormMode::Create,
                ..
            } => "Add category".to_string(),
            Self::Open {
                mode: FormMode::Edit(category),
                ..
            } => format!("Edit '{}'", category.name),
            Self::Closed => String::new(),
        }
    }

    /// Build the request for the current form contents.
    ///
    /// Edits keep every field of the target and only swap the name.
    pub fn submission(&self) -> Result<FormSubmission, SubmitError> {
        let Self::Open { mode, name, .. } = self else {
            return Err(SubmitError::NotOpen);
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(SubmitError::BlankName);
        }

        match mode {
            FormMode::Create => Ok(FormSubmission::Create(NewCategory::new(name))),
            FormMode::Edit(category) => {
                let id = category.id.clone().ok_or(SubmitError::MissingId)?;
                Ok(FormSubmission::Edit {
                    id,
                    category: category.renamed(name),
                })
            }
        }
    }
}
