use serde_json::Value;
use sqlx::PgPool;

use crate::database::models::ActivityRecord;
use crate::error::ApiError;

pub struct ActivityService {
    pool: PgPool,
}

impl ActivityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one execution-attempt record and return it with the
    /// store-assigned id and timestamp.
    ///
    /// `login_id` is accepted as opaque text; nothing checks that it names a
    /// user known to the tracker store.
    pub async fn log_activity(
        &self,
        login_id: &str,
        sql_query: &str,
        execution_result: &Value,
        success: bool,
    ) -> Result<ActivityRecord, ApiError> {
        let payload = execution_result.to_string();

        let record = sqlx::query_as::<_, ActivityRecord>(
            "INSERT INTO learner_activity (login_id, sql_query, execution_result, success) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, login_id, sql_query, execution_result, success, created_at",
        )
        .bind(login_id)
        .bind(sql_query)
        .bind(payload)
        .bind(success)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
