mod harness;

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use clickmate::app::action::Action;
use clickmate::app::effect::Effect;
use clickmate::app::ports::{
    MockConnectionService, MockQueryRepository, MockQueryService, QueryRepository,
};
use clickmate::app::reducers::QUERY_SAVED;
use clickmate::app::toast::ToastQueue;
use clickmate::domain::{TabIcon, TabId};
use clickmate::infra::adapters::TomlQueryStore;
use clickmate::infra::config::load_app_config;

use harness::fixtures;
use harness::{Session, create_runner, next_action, round_trip};

fn query_runner(
    query_service: MockQueryService,
) -> (
    clickmate::app::effect_runner::EffectRunner,
    tokio::sync::mpsc::Receiver<Action>,
) {
    create_runner(
        Arc::new(MockConnectionService::new()),
        Arc::new(query_service),
        Arc::new(MockQueryRepository::new()),
        Arc::new(ToastQueue::default()),
    )
}

fn tab_id(s: &str) -> TabId {
    TabId::from_string(s)
}

mod query_execution {
    use super::*;

    #[tokio::test]
    async fn result_lands_on_the_active_tab() {
        let mut query_service = MockQueryService::new();
        query_service
            .expect_execute()
            .times(1)
            .returning(|sql, _| Ok(fixtures::sample_query_result(sql)));
        let (runner, mut rx) = query_runner(query_service);
        let mut session = Session::new();
        session.dispatch_all([
            Action::AddTab,
            Action::EditSql("SELECT count() FROM events".to_string()),
        ]);

        let effects = session.dispatch(Action::ExecuteQuery);
        assert!(session.state.tabs.active_tab().unwrap().loading);

        let follow_up = round_trip(&mut session, &runner, &mut rx, effects).await;

        let tab = session.state.tabs.active_tab().unwrap();
        assert!(follow_up.is_empty());
        assert!(!tab.loading);
        assert_eq!(tab.query_result.as_ref().unwrap().row_count, 2);
        assert_eq!(tab.sql, "SELECT count() FROM events");
    }

    #[tokio::test]
    async fn late_result_lands_on_the_tab_active_at_arrival() {
        let mut query_service = MockQueryService::new();
        query_service
            .expect_execute()
            .returning(|sql, _| Ok(fixtures::sample_query_result(sql)));
        let (runner, mut rx) = query_runner(query_service);
        let mut session = Session::new();
        session.dispatch_all([Action::AddTab, Action::EditSql("SELECT 1".to_string())]);
        let effects = session.dispatch(Action::ExecuteQuery);

        runner.run(effects).await.unwrap();
        let completed = next_action(&mut rx).await;
        // The user opens another tab before the response is handled.
        session.dispatch(Action::AddTab);
        session.dispatch(completed);

        let issuing = session.state.tabs.tab(&tab_id("tab-1")).unwrap();
        let active = session.state.tabs.active_tab().unwrap();
        assert_eq!(active.id, tab_id("tab-2"));
        assert!(active.query_result.is_some());
        assert_eq!(active.sql, "SELECT 1");
        assert!(issuing.loading);
        assert!(issuing.query_result.is_none());
    }

    #[tokio::test]
    async fn server_error_is_reported_and_clears_loading() {
        let mut query_service = MockQueryService::new();
        query_service.expect_execute().returning(|_, _| {
            Err(clickmate::app::ports::QueryError::Server(
                "Code: 62. Syntax error".to_string(),
            ))
        });
        let (runner, mut rx) = query_runner(query_service);
        let mut session = Session::new();
        session.dispatch_all([Action::AddTab, Action::EditSql("SELEC 1".to_string())]);
        let effects = session.dispatch(Action::ExecuteQuery);

        let follow_up = round_trip(&mut session, &runner, &mut rx, effects).await;

        assert_eq!(follow_up, vec![Effect::error("Code: 62. Syntax error")]);
        assert!(!session.state.tabs.active_tab().unwrap().loading);
    }
}

mod saved_queries {
    use super::*;

    fn store_runner(
        temp_dir: &TempDir,
        toasts: Arc<ToastQueue>,
    ) -> (
        clickmate::app::effect_runner::EffectRunner,
        tokio::sync::mpsc::Receiver<Action>,
    ) {
        create_runner(
            Arc::new(MockConnectionService::new()),
            Arc::new(MockQueryService::new()),
            Arc::new(TomlQueryStore::with_config_dir(temp_dir.path().to_path_buf())),
            toasts,
        )
    }

    #[tokio::test]
    async fn save_close_and_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let toasts = Arc::new(ToastQueue::default());
        let (runner, mut rx) = store_runner(&temp_dir, Arc::clone(&toasts));
        let mut session = Session::new();
        session.dispatch_all([
            Action::AddTab,
            Action::EditSql("SELECT 1".to_string()),
            Action::RenameTab("smoke test".to_string()),
        ]);

        let effects = session.dispatch(Action::SaveActiveTab);
        let follow_up = round_trip(&mut session, &runner, &mut rx, effects).await;
        runner.run(follow_up).await.unwrap();

        let saved_tab = session.state.tabs.active_tab().unwrap();
        assert!(!saved_tab.touched);
        assert!(!saved_tab.is_new);
        assert_eq!(toasts.snapshot().last_success.as_deref(), Some(QUERY_SAVED));

        session.dispatch_all([Action::AddTab, Action::RemoveTab(tab_id("tab-1"))]);
        let effects = session.dispatch(Action::LoadSavedQueries);
        round_trip(&mut session, &runner, &mut rx, effects).await;
        assert_eq!(session.state.saved_queries.len(), 1);

        let query = session.state.saved_queries[0].clone();
        session.dispatch(Action::OpenSavedQuery(query));

        let restored = session.state.tabs.active_tab().unwrap();
        assert_eq!(restored.id, tab_id("tab-1"));
        assert_eq!(restored.name, "smoke test");
        assert_eq!(restored.sql, "SELECT 1");
        assert_eq!(restored.icon, TabIcon::Console);
        assert!(!restored.touched);
        assert_eq!(session.state.tabs.len(), 2);
    }

    #[tokio::test]
    async fn deleting_an_open_query_keeps_its_tab_as_new() {
        let temp_dir = TempDir::new().unwrap();
        let (runner, mut rx) = store_runner(&temp_dir, Arc::new(ToastQueue::default()));
        let mut session = Session::new();
        session.dispatch_all([Action::AddTab, Action::EditSql("SELECT 1".to_string())]);
        let effects = session.dispatch(Action::SaveActiveTab);
        round_trip(&mut session, &runner, &mut rx, effects).await;

        let effects = session.dispatch(Action::DeleteSavedQuery(tab_id("tab-1")));
        round_trip(&mut session, &runner, &mut rx, effects).await;

        let tab = session.state.tabs.active_tab().unwrap();
        assert_eq!(tab.id, tab_id("tab-2"));
        assert_eq!(tab.sql, "SELECT 1");
        assert!(tab.is_new);
        assert!(tab.touched);
        assert!(
            fs::read_to_string(temp_dir.path().join("queries.toml"))
                .unwrap()
                .contains("version = 1")
        );
        assert!(session.state.saved_queries.is_empty());
    }

    #[tokio::test]
    async fn save_as_new_inserts_under_fresh_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlQueryStore::with_config_dir(temp_dir.path().to_path_buf());
        let (runner, mut rx) = store_runner(&temp_dir, Arc::new(ToastQueue::default()));
        let mut session = Session::new();
        session.dispatch(Action::OpenSavedQuery(fixtures::sample_saved_query("q-1")));
        let effects = session.dispatch(Action::SaveActiveTab);
        assert_eq!(
            effects,
            vec![Effect::SaveQuery {
                query: fixtures::sample_saved_query("q-1"),
                is_new: false,
            }]
        );
        // A restored query that was never written fails as an update.
        round_trip(&mut session, &runner, &mut rx, effects).await;

        let effects = session.dispatch(Action::SaveActiveTabAsNew);
        round_trip(&mut session, &runner, &mut rx, effects).await;

        let stored = store.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, tab_id("tab-1"));
        assert_eq!(stored[0].sql, fixtures::sample_saved_query("q-1").sql);
    }
}

mod configuration {
    use super::*;

    #[test]
    fn refresh_on_restore_reloads_open_tab() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.toml"),
            "[tabs]\nrefresh_on_restore = true\n",
        )
        .unwrap();
        let config = load_app_config(temp_dir.path()).unwrap();
        let mut session = Session::with_options(config.tabs);
        let query = fixtures::sample_saved_query("q-1");
        session.dispatch(Action::OpenSavedQuery(query.clone()));
        session.dispatch(Action::EditSql("SELECT 'draft'".to_string()));

        session.dispatch(Action::OpenSavedQuery(query.clone()));

        let tab = session.state.tabs.active_tab().unwrap();
        assert_eq!(tab.sql, query.sql);
        assert!(!tab.touched);
    }

    #[test]
    fn default_config_keeps_edits_on_restore() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_app_config(temp_dir.path()).unwrap();
        let mut session = Session::with_options(config.tabs);
        let query = fixtures::sample_saved_query("q-1");
        session.dispatch(Action::OpenSavedQuery(query.clone()));
        session.dispatch(Action::EditSql("SELECT 'draft'".to_string()));

        session.dispatch(Action::OpenSavedQuery(query));

        assert_eq!(session.active_sql(), "SELECT 'draft'");
        assert!(session.state.render_dirty);
    }
}
