use clickmate::domain::{ConnectionBody, QueryResult, SavedQuery, TabId};

pub fn sample_saved_query(id: &str) -> SavedQuery {
    SavedQuery::new(
        TabId::from_string(id),
        "events per day",
        "SELECT toDate(ts) AS day, count() FROM events GROUP BY day",
        r#"{"limit": 100}"#,
    )
}

pub fn sample_query_result(sql: &str) -> QueryResult {
    QueryResult::success(
        sql.to_string(),
        vec!["day".to_string(), "count()".to_string()],
        vec![
            vec!["2026-01-01".to_string(), "42".to_string()],
            vec!["2026-01-02".to_string(), "17".to_string()],
        ],
        12,
    )
}

pub fn sample_connection_body() -> ConnectionBody {
    ConnectionBody {
        name: "analytics".to_string(),
        host: "ch.internal".to_string(),
        port: 8443,
        secure: true,
        database: "events".to_string(),
        username: "reader".to_string(),
        password: "hunter2".to_string(),
        ..Default::default()
    }
}
