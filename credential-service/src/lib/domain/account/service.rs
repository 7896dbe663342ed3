use std::sync::Arc;

use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountFilter;
use crate::account::models::Credentials;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Owns the hashing policy for registration; token issuance stays with the
/// HTTP layer's `Authenticator`.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `hashing_cost` - bcrypt cost, clamped to at most 8 by the hasher
    pub fn new(repository: Arc<R>, hashing_cost: u32) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(hashing_cost),
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<Account, AccountError> {
        // Fast-path uniqueness check. Not atomic with the insert below; the
        // store's unique index catches the losing side of a race and maps
        // to the same UsernameTaken outcome.
        let filter = AccountFilter::Username(credentials.username.as_str().to_string());
        if self.repository.find_by(&filter).await?.is_some() {
            return Err(AccountError::UsernameTaken(
                credentials.username.to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&credentials.password.plaintext())?;

        let id = self
            .repository
            .insert(&credentials.username, &password_hash)
            .await?;

        // The store assigns the id; read the record back as persisted.
        self.repository
            .find_by(&AccountFilter::Id(id))
            .await?
            .ok_or_else(|| {
                AccountError::DatabaseError(format!("account {id} missing after insert"))
            })
    }

    async fn find_by(&self, filter: &AccountFilter) -> Result<Option<Account>, AccountError> {
        self.repository.find_by(filter).await
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        self.repository.list_all().await
    }
}
