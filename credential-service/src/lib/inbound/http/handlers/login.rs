use auth::AuthenticationError;
use auth::Claims;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::CredentialsRequest;
use crate::account::models::AccountFilter;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn login<S: AccountServicePort>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::MissingCredentials)?;
    let credentials = body.try_into_credentials()?;

    // Unknown username and wrong password produce the same response; no
    // information about which one failed leaks to the client.
    let account = state
        .account_service
        .find_by(&AccountFilter::Username(
            credentials.username.as_str().to_string(),
        ))
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let claims = Claims::for_account(account.id, account.username.as_str());

    let result = state
        .authenticator
        .authenticate(
            &credentials.password.plaintext(),
            &account.password_hash,
            &claims,
        )
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("password verification failed: {err}"))
            }
            AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("token generation failed: {err}"))
            }
        })?;

    Ok(Json(LoginResponse {
        message: format!("welcome, {}", account.username),
        token: result.access_token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}
