use std::sync::Arc;

use serde_json::Value;
use sqlx::PgPool;

use crate::database::rows;
use crate::error::ApiError;

/// Validation predicate applied to statement text before it reaches the
/// warehouse. A stricter implementation can be swapped in without touching
/// callers.
pub trait StatementGuard: Send + Sync {
    fn check(&self, sql: &str) -> Result<(), String>;
}

/// Default guard: the statement must be non-empty and, after trimming and
/// case-normalizing, begin with `select`.
///
/// This is a textual prefix check only. Nothing is parsed, and SELECT-based
/// side channels (such as a data-modifying CTE nested inside a SELECT) are
/// not defended against. It is a convenience gate, not a security boundary.
pub struct SelectOnly;

impl StatementGuard for SelectOnly {
    fn check(&self, sql: &str) -> Result<(), String> {
        let trimmed = sql.trim();
        if trimmed.is_empty() {
            return Err("SQL query is required".to_string());
        }
        if !trimmed.to_lowercase().starts_with("select") {
            return Err("Only SELECT queries are allowed".to_string());
        }
        Ok(())
    }
}

pub struct QueryOutput {
    pub rows: Vec<Value>,
    pub row_count: usize,
}

pub struct QueryService {
    pool: PgPool,
    guard: Arc<dyn StatementGuard>,
}

impl QueryService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            guard: Arc::new(SelectOnly),
        }
    }

    pub fn with_guard(pool: PgPool, guard: Arc<dyn StatementGuard>) -> Self {
        Self { pool, guard }
    }

    /// Forward gated statement text to the warehouse and return every result
    /// row verbatim. Rejected statements never reach the store.
    pub async fn run_query(&self, sql: &str) -> Result<QueryOutput, ApiError> {
        self.guard.check(sql).map_err(ApiError::validation)?;

        let rows = sqlx::query(sql).fetch_all(&self.pool).await?;
        let data = rows::rows_to_json(&rows);
        let row_count = data.len();

        Ok(QueryOutput {
            rows: data,
            row_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_statements() {
        assert_eq!(SelectOnly.check(""), Err("SQL query is required".to_string()));
        assert_eq!(SelectOnly.check("   \n\t"), Err("SQL query is required".to_string()));
    }

    #[test]
    fn rejects_non_select_statements() {
        for sql in [
            "DELETE FROM users",
            "drop table learner_activity",
            "  UPDATE t SET x = 1",
            "INSERT INTO t VALUES (1)",
            "explain select 1",
        ] {
            assert_eq!(
                SelectOnly.check(sql),
                Err("Only SELECT queries are allowed".to_string()),
                "should reject: {sql}"
            );
        }
    }

    #[test]
    fn accepts_select_regardless_of_case_and_leading_whitespace() {
        for sql in ["select 1", "SELECT * FROM t", "\n   sElEcT now()"] {
            assert_eq!(SelectOnly.check(sql), Ok(()), "should accept: {sql}");
        }
    }
}
