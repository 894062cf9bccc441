use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

use crate::ui::categories::CategoryIntent;
use crate::ui::commands::CommandOutcome;
use crate::ui::mvi::Dispatch;

/// Everything the UI loop reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// Terminal size changed; the next draw picks up the new size.
    Resize,
    /// State delta produced by a finished request.
    Category(CategoryIntent),
    /// A request finished (after its deltas were queued).
    CommandFinished(CommandOutcome),
}

pub type AppEventSender = mpsc::UnboundedSender<AppEvent>;

/// Single event queue for the UI loop.
///
/// Terminal input and ticks come from a reader thread; request tasks push
/// intents and outcomes through [`EventHandler::sender`].
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: AppEventSender,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(_, _)) => event_tx.send(AppEvent::Resize),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                break;
                            }
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}

/// Dispatch capability handed to request tasks.
///
/// Intents are queued for the UI loop instead of being reduced in place, so
/// the store is only ever touched from the loop.
#[derive(Clone)]
pub struct IntentSender {
    tx: AppEventSender,
}

impl IntentSender {
    pub fn new(tx: AppEventSender) -> Self {
        Self { tx }
    }
}

impl Dispatch<CategoryIntent> for IntentSender {
    fn dispatch(&mut self, intent: CategoryIntent) {
        if self.tx.send(AppEvent::Category(intent)).is_err() {
            tracing::trace!("Intent dropped (UI loop gone)");
        }
    }
}
