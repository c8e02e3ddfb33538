#![allow(dead_code, reason = "each test binary uses a subset of the harness")]

pub mod fixtures;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use clickmate::app::action::Action;
use clickmate::app::effect::Effect;
use clickmate::app::effect_runner::EffectRunner;
use clickmate::app::ports::{ConnectionService, NotificationSink, QueryRepository, QueryService};
use clickmate::app::reducer::{ReduceContext, reduce};
use clickmate::app::state::AppState;
use clickmate::app::tab_id_generator::SequentialTabIdGenerator;
use clickmate::app::tab_store::TabStoreOptions;

/// Owns the state the way an embedder would: one writer, one action at a time.
pub struct Session {
    pub state: AppState,
    ids: SequentialTabIdGenerator,
    options: TabStoreOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::with_options(TabStoreOptions::default())
    }

    pub fn with_options(options: TabStoreOptions) -> Self {
        Self {
            state: AppState::new(),
            ids: SequentialTabIdGenerator::new("tab"),
            options,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let ctx = ReduceContext::new(&self.ids, self.options);
        reduce(&mut self.state, action, &ctx)
    }

    /// Dispatches every action in order, dropping the effects.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    pub fn active_sql(&self) -> &str {
        self.state
            .tabs
            .active_tab()
            .map(|tab| tab.sql.as_str())
            .unwrap_or_default()
    }
}

pub fn create_runner(
    connection_service: Arc<dyn ConnectionService>,
    query_service: Arc<dyn QueryService>,
    query_repository: Arc<dyn QueryRepository>,
    notifications: Arc<dyn NotificationSink>,
) -> (EffectRunner, mpsc::Receiver<Action>) {
    let (tx, rx) = mpsc::channel(32);
    let runner = EffectRunner::new(
        connection_service,
        query_service,
        query_repository,
        notifications,
        tx,
    );
    (runner, rx)
}

pub async fn next_action(rx: &mut mpsc::Receiver<Action>) -> Action {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timeout")
        .expect("channel closed")
}

/// Runs `effects`, then feeds the single follow-up action back into the session.
pub async fn round_trip(
    session: &mut Session,
    runner: &EffectRunner,
    rx: &mut mpsc::Receiver<Action>,
    effects: Vec<Effect>,
) -> Vec<Effect> {
    runner.run(effects).await.expect("effects failed");
    let action = next_action(rx).await;
    session.dispatch(action)
}
