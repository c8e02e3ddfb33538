//! Ordered set of editor tabs with one active tab.
//!
//! `reduce_tabs` is a pure transition: it never mutates the previous snapshot
//! and returns a new `TabStore` for every command. Tabs a command does not touch
//! keep their `Arc`, so `Arc::ptr_eq` tells a renderer which tabs changed.
//!
//! Commands aimed at a tab that does not exist (including a stale active id)
//! are no-ops; nothing here returns an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{QueryResult, SavedQuery, Tab, TabId};
use crate::tab_id_generator::TabIdGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStoreOptions {
    /// Restoring a query whose tab is already open reloads the tab's content
    /// from the query instead of only activating it.
    pub refresh_on_restore: bool,
}

/// Editable tab fields tracked for unsaved changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabChange {
    Sql(String),
    Params(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabCommand {
    AddTab,
    RemoveTab {
        id: TabId,
    },
    RenameTab {
        name: String,
    },
    /// No existence check; the caller is responsible for passing an open id.
    SetActiveTab {
        id: TabId,
    },
    SetLoading {
        loading: bool,
    },
    /// Missing `sql` / `params` overwrite the tab's values with empty strings.
    SetQueryResult {
        result: Arc<QueryResult>,
        sql: Option<String>,
        params: Option<String>,
    },
    MarkAsChanged(TabChange),
    MarkAsSaved,
    RestoreTab {
        query: SavedQuery,
    },
    /// Gives the tab a fresh identity ("save as") while keeping its content.
    BecomeToNew {
        id: TabId,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabStore {
    tabs: Vec<Arc<Tab>>,
    active_tab_id: TabId,
    /// The very first tab a store creates is the only one that may start non-closeable.
    first_tab_created: bool,
}

impl TabStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[Arc<Tab>] {
        &self.tabs
    }

    /// `TabId::EMPTY` when no tab is open.
    pub fn active_tab_id(&self) -> &TabId {
        &self.active_tab_id
    }

    pub fn active_tab(&self) -> Option<&Arc<Tab>> {
        self.tab(&self.active_tab_id)
    }

    pub fn tab(&self, id: &TabId) -> Option<&Arc<Tab>> {
        self.tabs.iter().find(|tab| &tab.id == id)
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.tab(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.tabs.iter().any(|tab| tab.touched)
    }
}

pub fn reduce_tabs(
    state: &TabStore,
    command: TabCommand,
    ids: &dyn TabIdGenerator,
    options: &TabStoreOptions,
) -> TabStore {
    match command {
        TabCommand::AddTab => {
            let Some(new_id) = fresh_id(state, ids) else {
                return state.clone();
            };
            let new_tab = Tab::blank(new_id, state.first_tab_created);
            let active_tab_id = new_tab.id.clone();
            let mut tabs = all_closeable(&state.tabs);
            tabs.push(Arc::new(new_tab));
            TabStore {
                tabs,
                active_tab_id,
                first_tab_created: true,
            }
        }

        TabCommand::RemoveTab { id } => {
            let tabs: Vec<Arc<Tab>> = state
                .tabs
                .iter()
                .filter(|tab| tab.id != id)
                .cloned()
                .collect();
            let active_tab_id = match tabs.last() {
                None => TabId::EMPTY,
                Some(last) if state.active_tab_id == id => last.id.clone(),
                Some(_) => state.active_tab_id.clone(),
            };
            TabStore {
                tabs,
                active_tab_id,
                first_tab_created: state.first_tab_created,
            }
        }

        TabCommand::RenameTab { name } => with_active(state, |tab| {
            Some(Tab {
                name,
                touched: true,
                ..tab.clone()
            })
        }),

        TabCommand::SetActiveTab { id } => TabStore {
            active_tab_id: id,
            ..state.clone()
        },

        TabCommand::SetLoading { loading } => {
            with_active(state, |tab| Some(Tab { loading, ..tab.clone() }))
        }

        TabCommand::SetQueryResult {
            result,
            sql,
            params,
        } => with_active(state, |tab| {
            Some(Tab {
                query_result: Some(result),
                sql: sql.unwrap_or_default(),
                params: params.unwrap_or_default(),
                loading: false,
                ..tab.clone()
            })
        }),

        TabCommand::MarkAsChanged(change) => with_active(state, |tab| match change {
            TabChange::Sql(value) if tab.sql != value => Some(Tab {
                sql: value,
                touched: true,
                ..tab.clone()
            }),
            TabChange::Params(value) if tab.params != value => Some(Tab {
                params: value,
                touched: true,
                ..tab.clone()
            }),
            _ => None,
        }),

        TabCommand::MarkAsSaved => with_active(state, |tab| {
            Some(Tab {
                touched: false,
                is_new: false,
                ..tab.clone()
            })
        }),

        TabCommand::RestoreTab { query } => restore_tab(state, &query, options),

        TabCommand::BecomeToNew { id } => {
            if !state.contains(&id) {
                return state.clone();
            }
            let Some(new_id) = fresh_id(state, ids) else {
                return state.clone();
            };
            let tabs = replace_tab(&state.tabs, &id, |tab| {
                Some(Tab {
                    id: new_id.clone(),
                    is_new: true,
                    touched: true,
                    ..tab.clone()
                })
            });
            let active_tab_id = if state.active_tab_id == id {
                new_id
            } else {
                state.active_tab_id.clone()
            };
            TabStore {
                tabs,
                active_tab_id,
                first_tab_created: state.first_tab_created,
            }
        }
    }
}

fn restore_tab(state: &TabStore, query: &SavedQuery, options: &TabStoreOptions) -> TabStore {
    if query.id.is_empty() {
        return state.clone();
    }

    if state.contains(&query.id) {
        // Only activation changes unless refresh is opted into; an open tab
        // otherwise keeps showing its own (possibly stale) content.
        let tabs = if options.refresh_on_restore {
            replace_tab(&state.tabs, &query.id, |tab| {
                Some(Tab {
                    closeable: tab.closeable,
                    loading: tab.loading,
                    ..Tab::restored(query)
                })
            })
        } else {
            state.tabs.clone()
        };
        return TabStore {
            tabs,
            active_tab_id: query.id.clone(),
            first_tab_created: state.first_tab_created,
        };
    }

    let mut tabs = all_closeable(&state.tabs);
    tabs.push(Arc::new(Tab::restored(query)));
    TabStore {
        tabs,
        active_tab_id: query.id.clone(),
        first_tab_created: true,
    }
}

/// Draws ids until one is not already open. Restored tabs carry ids the
/// generator never issued, so its next id may be taken. A generator that yields
/// distinct ids finds a free one within `len + 1` draws.
fn fresh_id(state: &TabStore, ids: &dyn TabIdGenerator) -> Option<TabId> {
    let found = (0..=state.len())
        .map(|_| ids.next_id())
        .find(|id| !id.is_empty() && !state.contains(id));
    if found.is_none() {
        warn!(open = state.len(), "id generator yielded no free tab id");
    }
    found
}

fn with_active(state: &TabStore, update: impl FnOnce(&Tab) -> Option<Tab>) -> TabStore {
    TabStore {
        tabs: replace_tab(&state.tabs, &state.active_tab_id, update),
        active_tab_id: state.active_tab_id.clone(),
        first_tab_created: state.first_tab_created,
    }
}

/// Copies the tab list, swapping in the updated tab for `id`.
/// `update` returning `None` keeps the original `Arc`.
fn replace_tab(
    tabs: &[Arc<Tab>],
    id: &TabId,
    update: impl FnOnce(&Tab) -> Option<Tab>,
) -> Vec<Arc<Tab>> {
    let mut update = Some(update);
    tabs.iter()
        .map(|tab| {
            if &tab.id == id
                && let Some(update) = update.take()
                && let Some(updated) = update(tab)
            {
                return Arc::new(updated);
            }
            Arc::clone(tab)
        })
        .collect()
}

fn all_closeable(tabs: &[Arc<Tab>]) -> Vec<Arc<Tab>> {
    tabs.iter()
        .map(|tab| {
            if tab.closeable {
                Arc::clone(tab)
            } else {
                Arc::new(Tab {
                    closeable: true,
                    ..(**tab).clone()
                })
            }
        })
        .collect()
}
