use sha2::{Digest, Sha256};
use sqlx::PgPool;

use crate::database::models::PublicUser;
use crate::error::ApiError;

pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user row keyed by email. The email doubles as the stored
    /// login identifier.
    ///
    /// Uniqueness rides on the store's UNIQUE constraint: one insert, with a
    /// unique-violation mapped to the conflict error, so concurrent signups
    /// for the same email cannot double-insert.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<PublicUser, ApiError> {
        if !is_valid_email(email) {
            return Err(ApiError::validation("Invalid email format"));
        }

        let result = sqlx::query_as::<_, PublicUser>(
            "INSERT INTO users (login_id, email, password, full_name) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, login_id, email, full_name",
        )
        .bind(email)
        .bind(email)
        .bind(hash_password(password))
        .bind(full_name)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some("23505") => {
                Err(ApiError::conflict("An account with this email already exists"))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Look up a user by exact email + password-digest match. Unknown email
    /// and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<PublicUser, ApiError> {
        let user = sqlx::query_as::<_, PublicUser>(
            "SELECT id, login_id, email, full_name FROM users \
             WHERE email = $1 AND password = $2",
        )
        .bind(email)
        .bind(hash_password(password))
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| ApiError::auth("Invalid email or password"))
    }
}

/// `local@domain.tld`-shaped check. Deliberately not RFC-exhaustive: one `@`,
/// a non-empty local part, and a dotted domain with non-empty labels around
/// the last dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Passwords are stored as SHA-256 hex digests, never as the raw text. The
/// login comparison runs in the store against fixed-length digest text.
fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "not-an-email",
            "",
            "@example.com",
            "user@",
            "user@domain",
            "user@@example.com",
            "user name@example.com",
            "user@.com",
            "user@host.",
        ] {
            assert!(!is_valid_email(email), "should reject: {email:?}");
        }
    }

    #[test]
    fn password_digest_is_stable_hex() {
        let digest = hash_password("x");
        assert_eq!(digest, hash_password("x"));
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(digest, hash_password("y"));
    }
}
