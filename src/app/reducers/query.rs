//! Query sub-reducer: running the active tab's SQL and storing the outcome.

use crate::action::Action;
use crate::effect::Effect;
use crate::reducer::ReduceContext;
use crate::state::AppState;
use crate::tab_store::TabCommand;

pub const NOTHING_TO_EXECUTE: &str = "Nothing to execute";

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_query(
    state: &mut AppState,
    action: &Action,
    ctx: &ReduceContext<'_>,
) -> Option<Vec<Effect>> {
    match action {
        Action::ExecuteQuery => {
            let Some(tab) = state.tabs.active_tab().cloned() else {
                return Some(vec![]);
            };
            if tab.loading {
                return Some(vec![]);
            }
            if tab.sql.trim().is_empty() {
                return Some(vec![Effect::error(NOTHING_TO_EXECUTE)]);
            }

            state.apply_tab_command(TabCommand::SetLoading { loading: true }, ctx);
            Some(vec![Effect::ExecuteQuery {
                tab_id: tab.id.clone(),
                sql: tab.sql.clone(),
                params: tab.params.clone(),
            }])
        }

        // The outcome is written to whichever tab is active when it arrives,
        // which is not necessarily the tab that issued the request.
        Action::QueryCompleted {
            sql,
            params,
            result,
            ..
        } => {
            state.apply_tab_command(
                TabCommand::SetQueryResult {
                    result: result.clone(),
                    sql: Some(sql.clone()),
                    params: Some(params.clone()),
                },
                ctx,
            );
            Some(vec![])
        }
        Action::QueryFailed { message, .. } => {
            state.apply_tab_command(TabCommand::SetLoading { loading: false }, ctx);
            Some(vec![Effect::error(message.clone())])
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{QueryResult, TabId};
    use crate::tab_id_generator::SequentialTabIdGenerator;
    use crate::tab_store::TabStoreOptions;

    fn id(s: &str) -> TabId {
        TabId::from_string(s)
    }

    fn result() -> Arc<QueryResult> {
        Arc::new(QueryResult::success(
            "SELECT 1".to_string(),
            vec!["1".to_string()],
            vec![vec!["1".to_string()]],
            2,
        ))
    }

    fn state_with_sql(ctx: &ReduceContext<'_>, sql: &str) -> AppState {
        let mut state = AppState::new();
        state.apply_tab_command(TabCommand::AddTab, ctx);
        state.apply_tab_command(
            TabCommand::MarkAsChanged(crate::tab_store::TabChange::Sql(sql.to_string())),
            ctx,
        );
        state
    }

    mod execute_query {
        use super::*;

        #[test]
        fn sets_loading_and_emits_effect() {
            let ids = SequentialTabIdGenerator::new("t");
            let ctx = ReduceContext::new(&ids, TabStoreOptions::default());
            let mut state = state_with_sql(&ctx, "SELECT 1");

            let effects = reduce_query(&mut state, &Action::ExecuteQuery, &ctx).unwrap();

            assert!(state.tabs.active_tab().unwrap().loading);
            assert_eq!(
                effects,
                vec![Effect::ExecuteQuery {
                    tab_id: id("t-1"),
                    sql: "SELECT 1".to_string(),
                    params: String::new(),
                }]
            );
        }

        #[test]
        fn noop_while_loading() {
            let ids = SequentialTabIdGenerator::new("t");
            let ctx = ReduceContext::new(&ids, TabStoreOptions::default());
            let mut state = state_with_sql(&ctx, "SELECT 1");
            reduce_query(&mut state, &Action::ExecuteQuery, &ctx);

            let effects = reduce_query(&mut state, &Action::ExecuteQuery, &ctx).unwrap();

            assert!(effects.is_empty());
        }

        #[test]
        fn blank_sql_reports_error_without_loading() {
            let ids = SequentialTabIdGenerator::new("t");
            let ctx = ReduceContext::new(&ids, TabStoreOptions::default());
            let mut state = state_with_sql(&ctx, "   ");

            let effects = reduce_query(&mut state, &Action::ExecuteQuery, &ctx).unwrap();

            assert_eq!(effects, vec![Effect::error(NOTHING_TO_EXECUTE)]);
            assert!(!state.tabs.active_tab().unwrap().loading);
        }

        #[test]
        fn noop_without_tabs() {
            let ids = SequentialTabIdGenerator::new("t");
            let ctx = ReduceContext::new(&ids, TabStoreOptions::default());
            let mut state = AppState::new();

            let effects = reduce_query(&mut state, &Action::ExecuteQuery, &ctx).unwrap();

            assert!(effects.is_empty());
        }
    }

    mod query_completed {
        use super::*;

        #[test]
        fn stores_result_and_clears_loading() {
            let ids = SequentialTabIdGenerator::new("t");
            let ctx = ReduceContext::new(&ids, TabStoreOptions::default());
            let mut state = state_with_sql(&ctx, "SELECT 1");
            reduce_query(&mut state, &Action::ExecuteQuery, &ctx);

            reduce_query(
                &mut state,
                &Action::QueryCompleted {
                    tab_id: id("t-1"),
                    sql: "SELECT 1".to_string(),
                    params: String::new(),
                    result: result(),
                },
                &ctx,
            );

            let tab = state.tabs.active_tab().unwrap();
            assert!(!tab.loading);
            assert_eq!(tab.query_result, Some(result()));
        }

        #[test]
        fn stale_response_lands_on_currently_active_tab() {
            let ids = SequentialTabIdGenerator::new("t");
            let ctx = ReduceContext::new(&ids, TabStoreOptions::default());
            let mut state = state_with_sql(&ctx, "SELECT 1");
            reduce_query(&mut state, &Action::ExecuteQuery, &ctx);
            state.apply_tab_command(TabCommand::AddTab, &ctx);

            reduce_query(
                &mut state,
                &Action::QueryCompleted {
                    tab_id: id("t-1"),
                    sql: "SELECT 1".to_string(),
                    params: String::new(),
                    result: result(),
                },
                &ctx,
            );

            // Known hazard: the issuing tab keeps spinning, the new tab gets the result.
            let issuing = state.tabs.tab(&id("t-1")).unwrap();
            let active = state.tabs.tab(&id("t-2")).unwrap();
            assert!(issuing.loading);
            assert!(issuing.query_result.is_none());
            assert_eq!(active.query_result, Some(result()));
            assert_eq!(active.sql, "SELECT 1");
        }
    }

    mod query_failed {
        use super::*;

        #[test]
        fn clears_loading_and_notifies() {
            let ids = SequentialTabIdGenerator::new("t");
            let ctx = ReduceContext::new(&ids, TabStoreOptions::default());
            let mut state = state_with_sql(&ctx, "SELEC 1");
            reduce_query(&mut state, &Action::ExecuteQuery, &ctx);

            let effects = reduce_query(
                &mut state,
                &Action::QueryFailed {
                    tab_id: id("t-1"),
                    message: "Syntax error".to_string(),
                },
                &ctx,
            )
            .unwrap();

            let tab = state.tabs.active_tab().unwrap();
            assert!(!tab.loading);
            assert!(tab.query_result.is_none());
            assert_eq!(tab.sql, "SELEC 1");
            assert_eq!(effects, vec![Effect::error("Syntax error")]);
        }
    }
}
