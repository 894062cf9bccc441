use crate::api::{Category, CategoryId};
use crate::ui::categories::{CategoryIntent, CategoryReducer, CategoryState};
use crate::ui::category_form::{CategoryFormState, FormIntent, FormReducer, FormSubmission};
use crate::ui::commands::{CommandOutcome, SubmitTicket, UiCommand, UiCommandSender};
use crate::ui::mvi::{Dispatch, Reducer, Store};
use crate::ui::notification::Notifications;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The category admin screen.
///
/// Owns the category store and the screen-local state around it (form,
/// selection, toasts). Network work leaves through the command sender and
/// comes back as dispatched intents plus a [`CommandOutcome`].
pub struct App {
    should_quit: bool,
    server: String,
    /// Category collection (MVI store).
    store: Store<CategoryReducer>,
    /// Modal form (MVI pattern, screen-local).
    form: CategoryFormState,
    selection: usize,
    /// Row armed for deletion by a first `d` press.
    pending_delete: Option<CategoryId>,
    notifications: Notifications,
    command_sender: Option<UiCommandSender>,
    next_ticket: SubmitTicket,
    /// Submission the open form is waiting on.
    awaiting: Option<SubmitTicket>,
}

impl App {
    pub fn new(server: impl Into<String>, notification_ticks: u32) -> Self {
        let mut store = Store::<CategoryReducer>::default();
        store.subscribe(|state: &CategoryState| {
            tracing::trace!(
                count = state.len(),
                loading = state.is_loading,
                "Category state changed"
            );
        });

        Self {
            should_quit: false,
            server: server.into(),
            store,
            form: CategoryFormState::default(),
            selection: 0,
            pending_delete: None,
            notifications: Notifications::new(notification_ticks),
            command_sender: None,
            next_ticket: 1,
            awaiting: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn categories(&self) -> &CategoryState {
        self.store.state()
    }

    pub fn form(&self) -> &CategoryFormState {
        &self.form
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.categories().categories.get(self.selection)
    }

    pub fn pending_delete(&self) -> Option<&CategoryId> {
        self.pending_delete.as_ref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_tick(&mut self) {
        self.notifications.on_tick();
    }

    // ========================================================================
    // Store (MVI pattern)
    // ========================================================================

    /// Apply a category intent to the store.
    pub fn dispatch(&mut self, intent: CategoryIntent) {
        self.store.dispatch(intent);
        self.clamp_selection();
        if let Some(id) = &self.pending_delete {
            if self.categories().position(id).is_none() {
                self.pending_delete = None;
            }
        }
    }

    pub fn on_command_finished(&mut self, outcome: CommandOutcome) {
        match outcome {
            CommandOutcome::Fetched => {}
            CommandOutcome::Created { category, ticket } => {
                self.notifications
                    .success(format!("Created '{}'", category.name));
                if self.settle(ticket) {
                    self.dispatch_form(FormIntent::Close);
                }
            }
            CommandOutcome::Edited { category, ticket } => {
                self.notifications.success(format!("Saved '{}'", category.name));
                if self.settle(ticket) {
                    self.dispatch_form(FormIntent::Close);
                }
            }
            CommandOutcome::Removed { name } => {
                self.notifications.success(format!("Deleted '{}'", name));
            }
            CommandOutcome::Failed {
                command,
                ticket,
                error,
            } => {
                self.notifications.error(format!(
                    "Could not {}: {}",
                    command.verb(),
                    error.user_message()
                ));
                if ticket.is_some_and(|ticket| self.settle(ticket)) {
                    self.dispatch_form(FormIntent::SubmitFailed);
                }
            }
        }
    }

    /// True when `ticket` is the submission the open form waits on; the wait
    /// ends either way for that ticket.
    fn settle(&mut self, ticket: SubmitTicket) -> bool {
        if self.awaiting == Some(ticket) {
            self.awaiting = None;
            true
        } else {
            tracing::debug!(ticket, "Ignoring outcome of a closed form");
            false
        }
    }

    // ========================================================================
    // List
    // ========================================================================

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.categories().len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn request_refresh(&mut self) {
        self.send_command(UiCommand::FetchAll);
    }

    /// First call arms the selected row, a second call on the same row deletes it.
    pub fn request_delete_selected(&mut self) {
        let Some(category) = self.selected_category().cloned() else {
            return;
        };
        let Some(id) = category.id else {
            self.notifications.error("Category has not been saved yet");
            return;
        };

        if self.pending_delete.as_ref() == Some(&id) {
            self.pending_delete = None;
            self.send_command(UiCommand::Remove {
                id,
                name: category.name,
            });
        } else {
            self.notifications
                .error(format!("Press d again to delete '{}'", category.name));
            self.pending_delete = Some(id);
        }
    }

    pub fn clear_pending_delete(&mut self) {
        self.pending_delete = None;
    }

    // ========================================================================
    // Form (MVI pattern)
    // ========================================================================

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn open_create_form(&mut self) {
        self.dispatch_form(FormIntent::OpenCreate);
    }

    pub fn open_edit_form(&mut self) {
        if let Some(category) = self.selected_category().cloned() {
            self.dispatch_form(FormIntent::OpenEdit { category });
        }
    }

    pub fn cancel_form(&mut self) {
        self.awaiting = None;
        self.dispatch_form(FormIntent::Close);
    }

    pub fn submit_form(&mut self) {
        if self.form.is_submitting() {
            return;
        }

        let ticket = self.next_ticket;
        let command = match self.form.submission() {
            Ok(FormSubmission::Create(category)) => UiCommand::Create { category, ticket },
            Ok(FormSubmission::Edit { id, category }) => UiCommand::Edit {
                id,
                category,
                ticket,
            },
            Err(err) => {
                self.notifications.error(err.to_string());
                return;
            }
        };

        if self.send_command(command) {
            self.next_ticket += 1;
            self.awaiting = Some(ticket);
            self.dispatch_form(FormIntent::Submit);
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Command queue rejected request");
                self.notifications
                    .error(format!("Busy, try again ({})", err));
                false
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.categories().len();
        if len == 0 {
            self.selection = 0;
        } else if self.selection >= len {
            self.selection = len - 1;
        }
    }
}
