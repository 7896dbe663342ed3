use async_trait::async_trait;
use sqlx::PgPool;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountFilter;
use crate::account::models::AccountId;
use crate::account::models::Username;
use crate::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password_hash: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId(row.id),
            username: Username::new(&row.username)?,
            password_hash: row.password_hash,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<AccountId, AccountError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO accounts (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(username.as_str())
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The unique index backs up the service's pre-insert check.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::UsernameTaken(username.as_str().to_string());
                }
            }
            AccountError::DatabaseError(e.to_string())
        })?;

        Ok(AccountId(id))
    }

    async fn find_by(&self, filter: &AccountFilter) -> Result<Option<Account>, AccountError> {
        let query = match filter {
            AccountFilter::Id(id) => sqlx::query_as::<_, AccountRow>(
                r#"
                SELECT id, username, password_hash
                FROM accounts
                WHERE id = $1
                "#,
            )
            .bind(id.0),
            AccountFilter::Username(username) => sqlx::query_as::<_, AccountRow>(
                r#"
                SELECT id, username, password_hash
                FROM accounts
                WHERE username = $1
                "#,
            )
            .bind(username.as_str()),
        };

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, password_hash
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Account::try_from).collect()
    }
}
