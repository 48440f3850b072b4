use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::error::ApiError;

/// User record in the database (table tbl_users).
///
/// The OTP columns mirror the account-verification and password-reset state
/// the schema reserves; no flow in this service touches them yet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAccount {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub email: String,
    // Persisted exactly as received. TODO: hash with a salted one-way scheme
    // before any production rollout.
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub verify_otp: Option<String>,
    pub verify_otp_expire_at: Option<i64>,
    #[serde(skip_serializing)]
    pub reset_otp: Option<String>,
    pub reset_otp_expired_at: Option<i64>,
    pub is_account_verified: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Fields the registration flow supplies; the store fills in the rest.
#[derive(Debug, Clone)]
pub struct NewUserAccount {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Durable keyed storage of user accounts. Exactly the two lookup paths the
/// request flows use.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account. Duplicate email or user_id fails with
    /// `ApiError::Conflict`; the unique indexes make this atomic under
    /// concurrent registrations.
    async fn insert(&self, new: NewUserAccount) -> Result<UserAccount, ApiError>;

    /// Find an account by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, ApiError>;
}

pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, new: NewUserAccount) -> Result<UserAccount, ApiError> {
        let user = sqlx::query_as::<_, UserAccount>(
            r#"
            INSERT INTO tbl_users (user_id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, email, password,
                      verify_otp, verify_otp_expire_at, reset_otp, reset_otp_expired_at,
                      is_account_verified, created_at, updated_at
            "#,
        )
        .bind(&new.user_id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, ApiError> {
        let user = sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT id, user_id, name, email, password,
                   verify_otp, verify_otp_expire_at, reset_otp, reset_otp_expired_at,
                   is_account_verified, created_at, updated_at
            FROM tbl_users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}

/// In-memory stand-in for the Postgres store, enforcing the same uniqueness
/// contract. Shared by the service and handler tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct InMemoryStore {
    rows: std::sync::Mutex<Vec<UserAccount>>,
}

#[cfg(test)]
impl InMemoryStore {
    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert(&self, new: NewUserAccount) -> Result<UserAccount, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == new.email) {
            return Err(ApiError::Conflict("Email already registered".into()));
        }
        if rows.iter().any(|u| u.user_id == new.user_id) {
            return Err(ApiError::Conflict("User id already exists".into()));
        }
        let now = OffsetDateTime::now_utc();
        let user = UserAccount {
            id: rows.len() as i64 + 1,
            user_id: new.user_id,
            name: new.name,
            email: new.email,
            password: new.password,
            verify_otp: None,
            verify_otp_expire_at: None,
            reset_otp: None,
            reset_otp_expired_at: None,
            is_account_verified: false,
            created_at: now,
            updated_at: now,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, ApiError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_account_never_serializes_credentials() {
        let user = UserAccount {
            id: 1,
            user_id: "u-1".into(),
            name: "Ada".into(),
            email: "ada@x.com".into(),
            password: "secret1".into(),
            verify_otp: Some("123456".into()),
            verify_otp_expire_at: None,
            reset_otp: Some("654321".into()),
            reset_otp_expired_at: None,
            is_account_verified: false,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret1"));
        assert!(!json.contains("123456"));
        assert!(!json.contains("654321"));
    }
}
