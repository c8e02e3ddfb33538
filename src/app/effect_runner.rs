//! Executes side effects returned by the reducer.
//!
//! Async effects are spawned and report back by sending exactly one action on
//! `action_tx`. Inside an `Effect::Sequence` they are awaited in place instead,
//! so each one completes before the next starts.

use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::effect::{Effect, Notification};
use crate::ports::{
    ConnectionService, NotificationSink, PersistError, QueryRepository, QueryService,
};

#[derive(Clone)]
struct Services {
    connection_service: Arc<dyn ConnectionService>,
    query_service: Arc<dyn QueryService>,
    query_repository: Arc<dyn QueryRepository>,
}

pub struct EffectRunner {
    services: Services,
    notifications: Arc<dyn NotificationSink>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        connection_service: Arc<dyn ConnectionService>,
        query_service: Arc<dyn QueryService>,
        query_repository: Arc<dyn QueryRepository>,
        notifications: Arc<dyn NotificationSink>,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            services: Services {
                connection_service,
                query_service,
                query_repository,
            },
            notifications,
            action_tx,
        }
    }

    pub async fn run(&self, effects: Vec<Effect>) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Sequence(seq_effects) => {
                    for seq_effect in flatten(seq_effects) {
                        self.run_single(seq_effect, true).await?;
                    }
                }
                single_effect => self.run_single(single_effect, false).await?,
            }
        }
        Ok(())
    }

    async fn run_single(&self, effect: Effect, in_sequence: bool) -> Result<()> {
        if effect.is_async() {
            return self.run_async(effect, in_sequence).await;
        }

        match effect {
            // Drawing belongs to the embedder's render loop.
            Effect::Render => Ok(()),
            Effect::Notify(Notification::Success(message)) => {
                self.notifications.success(&message);
                Ok(())
            }
            Effect::Notify(Notification::Error(message)) => {
                self.notifications.error(&message);
                Ok(())
            }
            Effect::DispatchActions(actions) => {
                for action in actions {
                    self.dispatch(action).await?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    async fn run_async(&self, effect: Effect, in_sequence: bool) -> Result<()> {
        let services = self.services.clone();
        if in_sequence {
            let action = complete(services, effect).await;
            return self.dispatch(action).await;
        }

        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = complete(services, effect).await;
            if tx.send(action).await.is_err() {
                debug!("action channel closed before async effect completed");
            }
        });
        Ok(())
    }

    async fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .await
            .map_err(|_| eyre!("action channel closed"))
    }
}

fn flatten(effects: Vec<Effect>) -> Vec<Effect> {
    effects
        .into_iter()
        .flat_map(|effect| match effect {
            Effect::Sequence(inner) => flatten(inner),
            other => vec![other],
        })
        .collect()
}

/// Runs one async effect to completion and maps the outcome to its follow-up action.
async fn complete(services: Services, effect: Effect) -> Action {
    match effect {
        Effect::ExecuteQuery {
            tab_id,
            sql,
            params,
        } => {
            debug!(tab_id = %tab_id, "executing query");
            match services.query_service.execute(&sql, &params).await {
                Ok(result) => Action::QueryCompleted {
                    tab_id,
                    sql,
                    params,
                    result: Arc::new(result),
                },
                Err(e) => {
                    warn!(tab_id = %tab_id, error = %e, "query failed");
                    Action::QueryFailed {
                        tab_id,
                        message: e.to_string(),
                    }
                }
            }
        }

        Effect::SaveQuery { query, is_new } => {
            let repository = Arc::clone(&services.query_repository);
            let record = query.clone();
            match blocking(move || repository.save(&record, is_new)).await {
                Ok(()) => {
                    info!(id = %query.id, is_new, "saved query");
                    Action::QuerySaved(query)
                }
                Err(e) => {
                    warn!(id = %query.id, error = %e, "failed to save query");
                    Action::QuerySaveFailed(e)
                }
            }
        }
        Effect::DeleteQuery { id } => {
            let repository = Arc::clone(&services.query_repository);
            let target = id.clone();
            match blocking(move || repository.delete(&target)).await {
                Ok(()) => {
                    info!(id = %id, "deleted query");
                    Action::QueryDeleted(id)
                }
                Err(e) => {
                    warn!(id = %id, error = %e, "failed to delete query");
                    Action::QueryDeleteFailed(e)
                }
            }
        }
        Effect::LoadSavedQueries => {
            let repository = Arc::clone(&services.query_repository);
            match blocking(move || repository.list()).await {
                Ok(queries) => {
                    debug!(count = queries.len(), "loaded saved queries");
                    Action::SavedQueriesLoaded(queries)
                }
                Err(e) => {
                    warn!(error = %e, "failed to load saved queries");
                    Action::SavedQueriesLoadFailed(e)
                }
            }
        }

        Effect::TestConnection { body } => {
            info!(url = %body.to_masked_url(), "testing connection");
            match services.connection_service.test(&body).await {
                Ok(()) => Action::ConnectionTestSucceeded,
                Err(e) => {
                    warn!(url = %body.to_masked_url(), error = %e, "connection test failed");
                    Action::ConnectionTestFailed(e.to_string())
                }
            }
        }
        Effect::SubmitConnection { id, body } => {
            info!(url = %body.to_masked_url(), "testing connection before save");
            if let Err(e) = services.connection_service.test(&body).await {
                warn!(url = %body.to_masked_url(), error = %e, "connection test failed, not saving");
                return Action::ConnectionTestFailed(e.to_string());
            }

            let is_edit = id.is_some();
            match services.connection_service.save(id, &body).await {
                Ok(connection) => {
                    info!(id = %connection.id, is_edit, "saved connection");
                    Action::ConnectionSaved {
                        connection,
                        is_edit,
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to save connection");
                    Action::ConnectionSaveFailed(e.to_string())
                }
            }
        }

        other => {
            debug_assert!(false, "Synchronous effect passed to complete: {:?}", other);
            Action::None
        }
    }
}

async fn blocking<T, F>(f: F) -> Result<T, String>
where
    F: FnOnce() -> Result<T, PersistError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(e.to_string()),
        Err(e) => Err(format!("Task panicked: {}", e)),
    }
}
