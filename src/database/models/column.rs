use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw `information_schema.columns` row, ordered by `ordinal_position`.
#[derive(Debug, Clone, FromRow)]
pub struct ColumnRow {
    pub column_name: String,
    pub data_type: String,
    /// information_schema reports nullability as "YES"/"NO" text.
    pub is_nullable: String,
    pub column_default: Option<String>,
}

/// Wire shape for one described column, annotated with primary-key membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub column_default: Option<String>,
    pub is_primary_key: bool,
}

impl From<ColumnRow> for ColumnDescriptor {
    fn from(row: ColumnRow) -> Self {
        Self {
            name: row.column_name,
            data_type: row.data_type,
            is_nullable: row.is_nullable.eq_ignore_ascii_case("yes"),
            column_default: row.column_default,
            is_primary_key: false,
        }
    }
}
