//! Tokio driver that executes reducer effects.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{GameRng, RandomSource};
use crate::engine::{AdvanceToken, Command, Effect, Outcome, Reducer};
use crate::provider::ContentProvider;

/// Runs one engine against a content provider.
///
/// The driver owns the state, applies commands through the reducer and
/// executes the returned effects:
///
/// - `FetchPool` spawns a provider fetch that reports back as `PoolLoaded`
/// - `ScheduleAdvance` arms a timer that reports back as `SettleElapsed`
/// - `CancelAdvance` aborts that timer
///
/// Completions queue up on an internal channel and are applied one at a
/// time by [`GameDriver::process_next`], so every transition happens on the
/// caller's task. Each new state is published on a `watch` channel.
///
/// Must be used from within a tokio runtime.
pub struct GameDriver<E: Reducer> {
    engine: E,
    state: E::State,
    rng: Box<dyn RandomSource + Send>,
    provider: Arc<dyn ContentProvider>,
    events_tx: mpsc::UnboundedSender<Command>,
    events_rx: mpsc::UnboundedReceiver<Command>,
    timers: FxHashMap<AdvanceToken, JoinHandle<()>>,
    publisher: watch::Sender<E::State>,
}

impl<E: Reducer> GameDriver<E> {
    /// Create a driver seeded from the engine configuration.
    pub fn new(engine: E, provider: Arc<dyn ContentProvider>) -> Self {
        let rng = GameRng::from_seed_or_entropy(engine.config().seed);
        info!(seed = rng.seed(), "starting game driver");
        Self::with_rng(engine, provider, rng)
    }

    /// Create a driver with an explicit random source.
    pub fn with_rng(
        engine: E,
        provider: Arc<dyn ContentProvider>,
        rng: impl RandomSource + Send + 'static,
    ) -> Self {
        let state = engine.initial_state();
        let (publisher, _) = watch::channel(state.clone());
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            engine,
            state,
            rng: Box::new(rng),
            provider,
            events_tx,
            events_rx,
            timers: FxHashMap::default(),
            publisher,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &E::State {
        &self.state
    }

    /// Get the engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Receive every state the driver moves to.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<E::State> {
        self.publisher.subscribe()
    }

    /// Number of armed auto-advance timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Apply a command and execute its effects.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let name = command.name();
        let step = self.engine.reduce(&self.state, command, &mut *self.rng);

        match &step.outcome {
            Outcome::Applied => {
                self.state = step.state;
                self.publisher.send_replace(self.state.clone());
                for effect in step.effects {
                    self.execute(effect);
                }
            }
            Outcome::Discarded => debug!(command = name, "completion discarded"),
            Outcome::Rejected(err) => debug!(command = name, error = %err, "command rejected"),
        }
        step.outcome
    }

    /// Wait for the next effect completion and apply it.
    ///
    /// Waits forever if nothing is in flight; check
    /// [`GameDriver::pending_timers`] or keep track of issued fetches first.
    pub async fn process_next(&mut self) -> Option<Outcome> {
        let command = self.events_rx.recv().await?;
        Some(self.complete(command))
    }

    /// Apply an already queued completion without waiting.
    pub fn try_process(&mut self) -> Option<Outcome> {
        let command = self.events_rx.try_recv().ok()?;
        Some(self.complete(command))
    }

    fn complete(&mut self, command: Command) -> Outcome {
        if let Command::SettleElapsed(token) = &command {
            self.timers.remove(token);
        }
        self.dispatch(command)
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::FetchPool { ticket } => {
                debug!(category = %ticket.category, generation = ticket.generation, "fetching pool");
                let provider = Arc::clone(&self.provider);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = provider.fetch_items(&ticket.category).await;
                    if tx.send(Command::PoolLoaded { ticket, result }).is_err() {
                        debug!("driver gone before pool arrived");
                    }
                });
            }

            Effect::ScheduleAdvance { token, delay } => {
                debug!(%token, ?delay, "arming settle timer");
                let tx = self.events_tx.clone();
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Command::SettleElapsed(token));
                });
                if let Some(previous) = self.timers.insert(token, handle) {
                    warn!(%token, "replacing a timer armed with the same token");
                    previous.abort();
                }
            }

            Effect::CancelAdvance { token } => {
                if let Some(handle) = self.timers.remove(&token) {
                    debug!(%token, "aborting settle timer");
                    handle.abort();
                }
            }
        }
    }
}

impl<E: Reducer> Drop for GameDriver<E> {
    fn drop(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}

impl<E: Reducer> std::fmt::Debug for GameDriver<E>
where
    E::State: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameDriver")
            .field("state", &self.state)
            .field("pending_timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}
