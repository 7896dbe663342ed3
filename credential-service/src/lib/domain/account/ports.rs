use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountFilter;
use crate::account::models::AccountId;
use crate::account::models::Credentials;
use crate::account::models::Username;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account from a validated credential payload.
    ///
    /// Checks username uniqueness, hashes the secret, inserts the record,
    /// and returns it as persisted (with the store-assigned id).
    ///
    /// # Errors
    /// * `UsernameTaken` - Username already exists
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, credentials: Credentials) -> Result<Account, AccountError>;

    /// Retrieve the first account matching an exact-field filter.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by(&self, filter: &AccountFilter) -> Result<Option<Account>, AccountError>;

    /// Retrieve all accounts. Diagnostics and listings only; business
    /// logic always goes through `find_by`.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Account>, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account and return the store-assigned identity.
    ///
    /// # Errors
    /// * `UsernameTaken` - Storage-level uniqueness constraint fired
    /// * `DatabaseError` - Store operation failed
    async fn insert(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<AccountId, AccountError>;

    /// Retrieve the first account matching an exact-field filter.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by(&self, filter: &AccountFilter) -> Result<Option<Account>, AccountError>;

    /// Retrieve all accounts.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Account>, AccountError>;
}
