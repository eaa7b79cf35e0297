use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Identity columns returned by signup/login statements. The stored password
/// digest is never selected into this type, so it cannot leak into a response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub login_id: String,
    pub email: String,
    pub full_name: String,
}
