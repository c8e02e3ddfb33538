use crate::connection_dialog_state::ConnectionDialogState;
use crate::domain::{Connection, SavedQuery};
use crate::reducer::ReduceContext;
use crate::tab_store::{TabCommand, TabStore, reduce_tabs};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tabs: TabStore,
    pub connection_dialog: ConnectionDialogState,
    pub active_connection: Option<Connection>,
    pub saved_queries: Vec<SavedQuery>,
    pub render_dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the tab snapshot with the result of `command`.
    pub fn apply_tab_command(&mut self, command: TabCommand, ctx: &ReduceContext<'_>) {
        self.tabs = reduce_tabs(&self.tabs, command, ctx.ids, &ctx.tab_options);
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }
}
