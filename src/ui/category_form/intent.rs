use crate::api::Category;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// "Add" selected on the list.
    OpenCreate,
    /// "Edit" selected on a row.
    OpenEdit { category: Category },
    Input { ch: char },
    Backspace,
    /// Request sent; input is frozen until it resolves.
    Submit,
    /// Request failed; the form stays open for another attempt.
    SubmitFailed,
    /// Cancel, or the request succeeded.
    Close,
}

impl Intent for FormIntent {}
