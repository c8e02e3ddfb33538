//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Generate ids itself (they come from `ReduceContext::ids`)
//! - Perform I/O operations or call ports
//! - Spawn async tasks
//!
//! Anything that needs the outside world is returned as an `Effect`.

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::{reduce_connection, reduce_query, reduce_saved_query, reduce_tab_action};
use crate::state::AppState;
use crate::tab_id_generator::TabIdGenerator;
use crate::tab_store::TabStoreOptions;

/// Dependencies the reducer needs but must not own.
pub struct ReduceContext<'a> {
    pub ids: &'a dyn TabIdGenerator,
    pub tab_options: TabStoreOptions,
}

impl<'a> ReduceContext<'a> {
    pub fn new(ids: &'a dyn TabIdGenerator, tab_options: TabStoreOptions) -> Self {
        Self { ids, tab_options }
    }
}

pub fn reduce(state: &mut AppState, action: Action, ctx: &ReduceContext<'_>) -> Vec<Effect> {
    // Mark dirty for all state-changing actions (except None and Render)
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, ctx);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, ctx: &ReduceContext<'_>) -> Vec<Effect> {
    if let Some(effects) = reduce_tab_action(state, &action, ctx) {
        return effects;
    }
    if let Some(effects) = reduce_query(state, &action, ctx) {
        return effects;
    }
    if let Some(effects) = reduce_saved_query(state, &action, ctx) {
        return effects;
    }
    if let Some(effects) = reduce_connection(state, &action) {
        return effects;
    }

    match action {
        Action::Render => {
            state.clear_dirty();
            vec![Effect::Render]
        }
        // Handled by sub-reducers
        _ => vec![],
    }
}
