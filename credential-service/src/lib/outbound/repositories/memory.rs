use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountFilter;
use crate::account::models::AccountId;
use crate::account::models::Username;
use crate::account::ports::AccountRepository;

/// In-memory account repository for tests and local experimentation.
///
/// Assigns sequential ids and enforces the same username uniqueness the
/// SQL schema does, so both stores surface identical conflict behavior.
pub struct MemoryAccountRepository {
    state: RwLock<MemoryState>,
}

struct MemoryState {
    next_id: i64,
    accounts: Vec<Account>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                accounts: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(account: &Account, filter: &AccountFilter) -> bool {
    match filter {
        AccountFilter::Id(id) => account.id == *id,
        AccountFilter::Username(username) => account.username.as_str() == username,
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn insert(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<AccountId, AccountError> {
        let mut state = self.state.write().await;

        if state
            .accounts
            .iter()
            .any(|account| account.username == *username)
        {
            return Err(AccountError::UsernameTaken(username.as_str().to_string()));
        }

        let id = AccountId(state.next_id);
        state.next_id += 1;

        state.accounts.push(Account {
            id,
            username: username.clone(),
            password_hash: password_hash.to_string(),
        });

        Ok(id)
    }

    async fn find_by(&self, filter: &AccountFilter) -> Result<Option<Account>, AccountError> {
        let state = self.state.read().await;

        Ok(state
            .accounts
            .iter()
            .find(|account| matches(account, filter))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        let state = self.state.read().await;

        Ok(state.accounts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repository = MemoryAccountRepository::new();

        let first = repository
            .insert(&Username::new("alice").unwrap(), "$2b$04$hash")
            .await
            .unwrap();
        let second = repository
            .insert(&Username::new("bob").unwrap(), "$2b$04$hash")
            .await
            .unwrap();

        assert_eq!(first, AccountId(1));
        assert_eq!(second, AccountId(2));
    }

    #[tokio::test]
    async fn test_insert_enforces_unique_username() {
        let repository = MemoryAccountRepository::new();
        let username = Username::new("alice").unwrap();

        repository.insert(&username, "$2b$04$hash").await.unwrap();
        let result = repository.insert(&username, "$2b$04$other").await;

        assert!(matches!(result, Err(AccountError::UsernameTaken(_))));
        assert_eq!(repository.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_filters() {
        let repository = MemoryAccountRepository::new();
        let id = repository
            .insert(&Username::new("alice").unwrap(), "$2b$04$hash")
            .await
            .unwrap();

        let by_id = repository.find_by(&AccountFilter::Id(id)).await.unwrap();
        assert!(by_id.is_some());

        let by_username = repository
            .find_by(&AccountFilter::Username("alice".to_string()))
            .await
            .unwrap();
        assert_eq!(by_username.unwrap().id, id);

        let missing = repository
            .find_by(&AccountFilter::Username("bob".to_string()))
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
