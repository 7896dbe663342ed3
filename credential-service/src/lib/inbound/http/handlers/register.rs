use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::CredentialsRequest;
use crate::account::models::Account;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn register<S: AccountServicePort>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    // A missing or malformed body is indistinguishable from missing fields.
    let Json(body) = payload.map_err(|_| ApiError::MissingCredentials)?;
    let credentials = body.try_into_credentials()?;

    let account = state.account_service.register(credentials).await?;

    Ok((StatusCode::CREATED, Json((&account).into())))
}

/// Created-account response. The stored hash is part of this service's
/// contract and is returned deliberately, not redacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            username: account.username.as_str().to_string(),
            password_hash: account.password_hash.clone(),
        }
    }
}
