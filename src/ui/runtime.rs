use crate::api::CategoryApi;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::commands::{execute, UiCommand};
use crate::ui::events::{AppEvent, AppEventSender, EventHandler, IntentSender};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Pending requests the screen may queue before new ones are refused.
const COMMAND_BUFFER: usize = 32;

pub async fn run(config: Config, api: Arc<dyn CategoryApi>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let worker = tokio::spawn(run_commands(api, command_rx, events.sender()));

    let mut app = App::new(config.api.base_url.clone(), config.ui.notification_ticks);
    app.set_command_sender(command_tx);
    app.request_refresh();

    let mut animation_tick: usize = 0;
    tracing::info!(server = %config.api.base_url, "Category screen started");

    loop {
        terminal.draw(|frame| draw(frame, &app, animation_tick))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Tick) => {
                animation_tick = animation_tick.wrapping_add(1);
                app.on_tick();
            }
            Some(AppEvent::Resize) => {}
            Some(AppEvent::Category(intent)) => app.dispatch(intent),
            Some(AppEvent::CommandFinished(outcome)) => app.on_command_finished(outcome),
            None => break,
        }
    }

    worker.abort();
    drop(guard);
    tracing::info!("Category screen closed");
    Ok(())
}

/// Runs queued commands one at a time, in the order the screen sent them.
///
/// Intents from one command are all queued before the next command starts,
/// so a slow list fetch cannot land on top of a later create, and the
/// loading flag always belongs to the fetch in progress. Results re-enter the
/// UI loop through `events`.
async fn run_commands(
    api: Arc<dyn CategoryApi>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: AppEventSender,
) {
    let mut dispatch = IntentSender::new(events.clone());
    while let Some(command) = commands.recv().await {
        tracing::debug!(command = ?command.kind(), "Dispatching command");
        let outcome = execute(api.as_ref(), &mut dispatch, command).await;
        if events.send(AppEvent::CommandFinished(outcome)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Category, CategoryId, NewCategory};
    use crate::ui::categories::{add_category, set_categories, set_loading, CategoryIntent};
    use crate::ui::commands::CommandOutcome;
    use async_trait::async_trait;

    /// List is slow, create is instant.
    struct SlowListApi;

    #[async_trait]
    impl CategoryApi for SlowListApi {
        async fn list(&self) -> Result<Vec<Category>, ApiError> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(vec![Category::new(1, "programming")])
        }

        async fn create(&self, category: &NewCategory) -> Result<Category, ApiError> {
            Ok(Category::new(2, category.name.clone()))
        }

        async fn update(
            &self,
            _id: &CategoryId,
            category: &Category,
        ) -> Result<Category, ApiError> {
            Ok(category.clone())
        }

        async fn delete(&self, _id: &CategoryId) -> Result<(), ApiError> {
            Ok(())
        }
    }

    enum Seen {
        Intent(CategoryIntent),
        Finished(CommandOutcome),
    }

    async fn collect(
        events: &mut mpsc::UnboundedReceiver<AppEvent>,
        finished: usize,
    ) -> Vec<Seen> {
        let mut seen = Vec::new();
        let mut done = 0;
        while done < finished {
            match events.recv().await.unwrap() {
                AppEvent::Category(intent) => seen.push(Seen::Intent(intent)),
                AppEvent::CommandFinished(outcome) => {
                    done += 1;
                    seen.push(Seen::Finished(outcome));
                }
                other => panic!("unexpected event {:?}", other),
            }
        }
        seen
    }

    #[tokio::test]
    async fn commands_finish_in_send_order() {
        let (command_tx, command_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_commands(Arc::new(SlowListApi), command_rx, event_tx));

        command_tx.send(UiCommand::FetchAll).await.unwrap();
        command_tx
            .send(UiCommand::Create {
                category: NewCategory::new("action"),
                ticket: 1,
            })
            .await
            .unwrap();

        let seen = collect(&mut event_rx, 2).await;
        let intents: Vec<&CategoryIntent> = seen
            .iter()
            .filter_map(|event| match event {
                Seen::Intent(intent) => Some(intent),
                Seen::Finished(_) => None,
            })
            .collect();
        assert_eq!(
            intents,
            vec![
                &set_loading(true),
                &set_categories(vec![Category::new(1, "programming")]),
                &set_loading(false),
                &add_category(Category::new(2, "action")),
            ]
        );
        assert!(matches!(seen[3], Seen::Finished(CommandOutcome::Fetched)));
        assert!(matches!(
            seen[5],
            Seen::Finished(CommandOutcome::Created { ticket: 1, .. })
        ));

        drop(command_tx);
        worker.await.unwrap();
    }

    #[tokio::test]
    async fn overlapping_refreshes_do_not_interleave_loading() {
        let (command_tx, command_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_commands(Arc::new(SlowListApi), command_rx, event_tx));

        command_tx.send(UiCommand::FetchAll).await.unwrap();
        command_tx.send(UiCommand::FetchAll).await.unwrap();

        let loading: Vec<bool> = collect(&mut event_rx, 2)
            .await
            .into_iter()
            .filter_map(|event| match event {
                Seen::Intent(CategoryIntent::SetLoading { flag }) => Some(flag),
                _ => None,
            })
            .collect();
        assert_eq!(loading, vec![true, false, true, false]);
    }
}
