use auth::Claims;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::account::models::Account;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Protected listing of all registered accounts. Unlike the registration
/// response, hashes stay out of this one.
pub async fn list_accounts<S: AccountServicePort>(
    State(state): State<AppState<S>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<AccountSummary>>, ApiError> {
    tracing::debug!(subject = %claims.sub, username = %claims.username, "listing accounts");

    let accounts = state.account_service.list_all().await?;

    Ok(Json(accounts.iter().map(AccountSummary::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: i64,
    pub username: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            username: account.username.as_str().to_string(),
        }
    }
}
