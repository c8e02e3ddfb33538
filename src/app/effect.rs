//! Side effects returned by the reducer, executed by EffectRunner.

use crate::action::Action;
use crate::domain::{ConnectionBody, ConnectionId, SavedQuery, TabId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render,

    /// Completes with QueryCompleted / QueryFailed
    ExecuteQuery {
        tab_id: TabId,
        sql: String,
        params: String,
    },

    SaveQuery {
        query: SavedQuery,
        is_new: bool,
    },
    DeleteQuery {
        id: TabId,
    },
    LoadSavedQueries,

    TestConnection {
        body: ConnectionBody,
    },
    /// Tests first; nothing is saved when the test fails
    SubmitConnection {
        id: Option<ConnectionId>,
        body: ConnectionBody,
    },

    Notify(Notification),

    /// Runs in order, each effect finishing before the next starts
    Sequence(Vec<Effect>),

    /// Dispatch actions to be processed by the reducer
    DispatchActions(Vec<Action>),
}

impl Effect {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Notify(Notification::Success(message.into()))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Notify(Notification::Error(message.into()))
    }

    /// Effects that complete by dispatching an action later
    pub fn is_async(&self) -> bool {
        matches!(
            self,
            Self::ExecuteQuery { .. }
                | Self::SaveQuery { .. }
                | Self::DeleteQuery { .. }
                | Self::LoadSavedQueries
                | Self::TestConnection { .. }
                | Self::SubmitConnection { .. }
        )
    }
}
