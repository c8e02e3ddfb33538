//! Saved-query sub-reducer: persisting tabs, reopening and deleting saved queries.

use crate::action::Action;
use crate::effect::Effect;
use crate::reducer::ReduceContext;
use crate::state::AppState;
use crate::tab_store::TabCommand;

pub const QUERY_SAVED: &str = "The query has been saved successfully";
pub const QUERY_SAVE_FAILED: &str = "The query could not be saved";
pub const QUERY_DELETE_FAILED: &str = "The query could not be deleted";
pub const QUERIES_LOAD_FAILED: &str = "Saved queries could not be loaded";

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_saved_query(
    state: &mut AppState,
    action: &Action,
    ctx: &ReduceContext<'_>,
) -> Option<Vec<Effect>> {
    match action {
        Action::SaveActiveTab => Some(save_active_tab(state)),
        Action::SaveActiveTabAsNew => {
            let Some(id) = state.tabs.active_tab().map(|tab| tab.id.clone()) else {
                return Some(vec![]);
            };
            state.apply_tab_command(TabCommand::BecomeToNew { id }, ctx);
            Some(save_active_tab(state))
        }
        Action::QuerySaved(query) => {
            // Only the active tab can be marked saved; a tab the user left
            // while the save was in flight stays touched.
            if state.tabs.active_tab_id() == &query.id {
                state.apply_tab_command(TabCommand::MarkAsSaved, ctx);
            }
            match state.saved_queries.iter_mut().find(|q| q.id == query.id) {
                Some(existing) => *existing = query.clone(),
                None => state.saved_queries.push(query.clone()),
            }
            Some(vec![Effect::success(QUERY_SAVED)])
        }
        Action::QuerySaveFailed(_) => Some(vec![Effect::error(QUERY_SAVE_FAILED)]),

        Action::OpenSavedQuery(query) => {
            state.apply_tab_command(
                TabCommand::RestoreTab {
                    query: query.clone(),
                },
                ctx,
            );
            Some(vec![])
        }

        Action::LoadSavedQueries => Some(vec![Effect::LoadSavedQueries]),
        Action::SavedQueriesLoaded(queries) => {
            state.saved_queries = queries.clone();
            Some(vec![])
        }
        Action::SavedQueriesLoadFailed(_) => Some(vec![Effect::error(QUERIES_LOAD_FAILED)]),

        Action::DeleteSavedQuery(id) => Some(vec![Effect::DeleteQuery { id: id.clone() }]),
        Action::QueryDeleted(id) => {
            state.saved_queries.retain(|q| &q.id != id);
            // An open tab outlives its saved query as an unsaved copy.
            if state.tabs.contains(id) {
                state.apply_tab_command(TabCommand::BecomeToNew { id: id.clone() }, ctx);
            }
            Some(vec![])
        }
        Action::QueryDeleteFailed(_) => Some(vec![Effect::error(QUERY_DELETE_FAILED)]),

        _ => None,
    }
}

fn save_active_tab(state: &AppState) -> Vec<Effect> {
    match state.tabs.active_tab() {
        Some(tab) => vec![Effect::SaveQuery {
            query: tab.to_saved_query(),
            is_new: tab.is_new,
        }],
        None => vec![],
    }
}
