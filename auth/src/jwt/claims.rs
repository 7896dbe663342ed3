use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Tokens expire this many minutes after issuance.
pub const TOKEN_TTL_MINUTES: i64 = 10;

/// Claims carried by every token this service issues.
///
/// `sub` holds the account id (rendered as a string, per JWT convention),
/// `username` the account's name at issuance time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Account username at the time the token was minted
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an account with the standard 10 minute expiry.
    pub fn for_account(account_id: impl ToString, username: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(TOKEN_TTL_MINUTES);

        Self {
            sub: account_id.to_string(),
            username: username.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Override the expiration (Unix timestamp). Used to mint short- or
    /// back-dated tokens in tests.
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Check whether the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_account_sets_ten_minute_expiry() {
        let claims = Claims::for_account(42, "alice");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_MINUTES * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::for_account(1, "alice").with_expiration(1000);

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // exactly at expiration
        assert!(claims.is_expired(1001));
    }
}
