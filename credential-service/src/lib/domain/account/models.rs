use std::borrow::Cow;
use std::fmt;

use crate::account::errors::UsernameError;

/// Account aggregate entity.
///
/// Created only through the registration flow; this service never updates
/// or deletes accounts.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub password_hash: String,
}

/// Account unique identifier, assigned by the record store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Trimmed on construction; must not be blank. Uniqueness is a service
/// concern, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Create a username from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    /// * `Blank` - Input trims to the empty string
    pub fn new(raw: &str) -> Result<Self, UsernameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UsernameError::Blank);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext secret from a credential payload.
///
/// String secrets arrive trimmed; numeric secrets keep their literal JSON
/// rendering untouched. The asymmetry matches the contract this service
/// implements: only string-typed passwords are trimmed before hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Password {
    Text(String),
    Number(serde_json::Number),
}

impl Password {
    /// The plaintext fed to the hasher.
    pub fn plaintext(&self) -> Cow<'_, str> {
        match self {
            Password::Text(text) => Cow::Borrowed(text),
            Password::Number(number) => Cow::Owned(number.to_string()),
        }
    }
}

/// Request-scoped credential payload, produced by shape validation.
///
/// Discarded after the register/login flow completes; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: Username,
    pub password: Password,
}

/// Exact-match lookup predicates the repository supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    Id(AccountId),
    Username(String),
}
