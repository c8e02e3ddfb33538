//! Tab sub-reducer: maps editor actions onto tab commands.

use crate::action::Action;
use crate::effect::Effect;
use crate::reducer::ReduceContext;
use crate::state::AppState;
use crate::tab_store::{TabChange, TabCommand};

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_tab_action(
    state: &mut AppState,
    action: &Action,
    ctx: &ReduceContext<'_>,
) -> Option<Vec<Effect>> {
    let command = match action {
        Action::AddTab => TabCommand::AddTab,
        Action::RemoveTab(id) => TabCommand::RemoveTab { id: id.clone() },
        Action::RenameTab(name) => TabCommand::RenameTab { name: name.clone() },
        Action::SetActiveTab(id) => TabCommand::SetActiveTab { id: id.clone() },
        Action::EditSql(sql) => TabCommand::MarkAsChanged(TabChange::Sql(sql.clone())),
        Action::EditParams(params) => {
            TabCommand::MarkAsChanged(TabChange::Params(params.clone()))
        }
        Action::Tab(command) => command.clone(),
        _ => return None,
    };

    state.apply_tab_command(command, ctx);
    Some(vec![])
}
