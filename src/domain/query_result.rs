/// Result of a SQL execution, or the error the server returned for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// The SQL that was executed
    pub query: String,
    pub columns: Vec<String>,
    /// Row data as strings (each inner Vec represents a row)
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
    pub execution_time_ms: u64,
    /// Error message if the query failed
    pub error: Option<String>,
}

impl QueryResult {
    pub fn success(
        query: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
        execution_time_ms: u64,
    ) -> Self {
        let row_count = rows.len();
        Self {
            query,
            columns,
            rows,
            row_count,
            execution_time_ms,
            error: None,
        }
    }

    pub fn error(query: String, error: String, execution_time_ms: u64) -> Self {
        Self {
            query,
            columns: Vec::new(),
            rows: Vec::new(),
            row_count: 0,
            execution_time_ms,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn row_count_display(&self) -> String {
        if self.row_count == 1 {
            "1 row".to_string()
        } else {
            format!("{} rows", self.row_count)
        }
    }
}
