//! Requests from the screen that need the network, and their outcomes.

use tokio::sync::mpsc;

use crate::api::{ApiError, Category, CategoryApi, CategoryId, NewCategory};
use crate::ui::categories::{
    create_category, edit_category, fetch_all_categories, remove_category, CategoryIntent,
};
use crate::ui::mvi::Dispatch;

/// Identifies one form submission, so a late answer only settles the form
/// that sent it.
pub type SubmitTicket = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    FetchAll,
    Create {
        category: NewCategory,
        ticket: SubmitTicket,
    },
    Edit {
        id: CategoryId,
        category: Category,
        ticket: SubmitTicket,
    },
    Remove {
        id: CategoryId,
        name: String,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    FetchAll,
    Create,
    Edit,
    Remove,
}

impl CommandKind {
    pub fn verb(&self) -> &'static str {
        match self {
            CommandKind::FetchAll => "load categories",
            CommandKind::Create => "create category",
            CommandKind::Edit => "save category",
            CommandKind::Remove => "delete category",
        }
    }

    /// Whether the command was sent from the modal form.
    pub fn is_form_submit(&self) -> bool {
        matches!(self, CommandKind::Create | CommandKind::Edit)
    }
}

impl UiCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            UiCommand::FetchAll => CommandKind::FetchAll,
            UiCommand::Create { .. } => CommandKind::Create,
            UiCommand::Edit { .. } => CommandKind::Edit,
            UiCommand::Remove { .. } => CommandKind::Remove,
        }
    }

    /// Ticket of the form submission this command came from, if any.
    pub fn ticket(&self) -> Option<SubmitTicket> {
        match self {
            UiCommand::Create { ticket, .. } | UiCommand::Edit { ticket, .. } => Some(*ticket),
            UiCommand::FetchAll | UiCommand::Remove { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum CommandOutcome {
    Fetched,
    Created {
        category: Category,
        ticket: SubmitTicket,
    },
    Edited {
        category: Category,
        ticket: SubmitTicket,
    },
    Removed {
        name: String,
    },
    Failed {
        command: CommandKind,
        ticket: Option<SubmitTicket>,
        error: ApiError,
    },
}

/// Run one command through the matching async dispatcher.
///
/// State deltas go through `dispatch`; the returned outcome only tells the
/// screen how the request ended.
pub async fn execute<A, D>(api: &A, dispatch: &mut D, command: UiCommand) -> CommandOutcome
where
    A: CategoryApi + ?Sized,
    D: Dispatch<CategoryIntent>,
{
    let kind = command.kind();
    let ticket = command.ticket();
    let result = match command {
        UiCommand::FetchAll => fetch_all_categories(api, dispatch)
            .await
            .map(|()| CommandOutcome::Fetched),
        UiCommand::Create { category, ticket } => create_category(api, dispatch, category)
            .await
            .map(|category| CommandOutcome::Created { category, ticket }),
        UiCommand::Edit {
            id,
            category,
            ticket,
        } => edit_category(api, dispatch, id, category)
            .await
            .map(|category| CommandOutcome::Edited { category, ticket }),
        UiCommand::Remove { id, name } => remove_category(api, dispatch, id)
            .await
            .map(|()| CommandOutcome::Removed { name }),
    };

    result.unwrap_or_else(|error| {
        tracing::error!(command = ?kind, error = %error, "Command failed");
        CommandOutcome::Failed {
            command: kind,
            ticket,
            error,
        }
    })
}
