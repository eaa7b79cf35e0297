use std::collections::HashSet;

use sqlx::PgPool;

use crate::database::models::{ColumnDescriptor, ColumnRow};
use crate::error::ApiError;

/// All catalog lookups are scoped to this fixed schema namespace.
const INTROSPECTION_SCHEMA: &str = "public";

pub struct SchemaService {
    pool: PgPool,
}

impl SchemaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Enumerate base-table names in the fixed schema, alphabetically.
    pub async fn list_tables(&self) -> Result<Vec<String>, ApiError> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = $1 AND table_type = 'BASE TABLE' \
             ORDER BY table_name",
        )
        .bind(INTROSPECTION_SCHEMA)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    /// Ordered column descriptors for one table, annotated with primary-key
    /// membership.
    ///
    /// Two catalog lookups: column metadata by physical position, then the
    /// set of column names participating in the table's PRIMARY KEY
    /// constraint, merged by exact name match. An unknown table is not an
    /// error at this layer: both lookups match nothing and the result is an
    /// empty descriptor list.
    pub async fn describe_table(
        &self,
        table_name: &str,
    ) -> Result<Vec<ColumnDescriptor>, ApiError> {
        let columns: Vec<ColumnRow> = sqlx::query_as(
            "SELECT column_name, data_type, is_nullable, column_default \
             FROM information_schema.columns \
             WHERE table_schema = $1 AND table_name = $2 \
             ORDER BY ordinal_position",
        )
        .bind(INTROSPECTION_SCHEMA)
        .bind(table_name)
        .fetch_all(&self.pool)
        .await?;

        let keys: Vec<String> = sqlx::query_scalar(
            "SELECT kcu.column_name \
             FROM information_schema.key_column_usage kcu \
             JOIN information_schema.table_constraints tc \
               ON tc.constraint_name = kcu.constraint_name \
              AND tc.table_schema = kcu.table_schema \
              AND tc.table_name = kcu.table_name \
             WHERE tc.constraint_type = 'PRIMARY KEY' \
               AND kcu.table_schema = $1 \
               AND kcu.table_name = $2",
        )
        .bind(INTROSPECTION_SCHEMA)
        .bind(table_name)
        .fetch_all(&self.pool)
        .await?;

        let key_set: HashSet<String> = keys.into_iter().collect();
        let descriptors = columns.into_iter().map(ColumnDescriptor::from).collect();

        Ok(apply_primary_keys(descriptors, &key_set))
    }
}

fn apply_primary_keys(
    mut columns: Vec<ColumnDescriptor>,
    keys: &HashSet<String>,
) -> Vec<ColumnDescriptor> {
    for column in &mut columns {
        column.is_primary_key = keys.contains(&column.name);
    }
    columns
}
