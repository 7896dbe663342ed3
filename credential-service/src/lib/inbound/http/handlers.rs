use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::account::errors::AccountError;
use crate::account::models::Credentials;
use crate::account::models::Password;
use crate::account::models::Username;

pub mod list_accounts;
pub mod login;
pub mod register;

/// API-boundary errors with the fixed response bodies this service's
/// contract prescribes.
///
/// Every expected auth failure is a 404 with a `{"message": ...}` body —
/// deliberately, for compatibility; do not "correct" the statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    MissingCredentials,
    UsernameTaken,
    InvalidCredentials,
    TokenRequired,
    TokenInvalid,
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingCredentials => {
                (StatusCode::NOT_FOUND, "username and password required")
            }
            ApiError::UsernameTaken => (StatusCode::NOT_FOUND, "username taken"),
            ApiError::InvalidCredentials => (StatusCode::NOT_FOUND, "invalid credentials"),
            ApiError::TokenRequired => (StatusCode::NOT_FOUND, "token required"),
            ApiError::TokenInvalid => (StatusCode::NOT_FOUND, "token invalid"),
            ApiError::InternalServerError(detail) => {
                // Logged here; the client only ever sees the opaque body.
                tracing::error!(error = %detail, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::UsernameTaken(_) => ApiError::UsernameTaken,
            AccountError::InvalidUsername(_)
            | AccountError::Password(_)
            | AccountError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Raw credential body shared by the register and login endpoints.
///
/// Fields are optional so shape validation, not deserialization, decides
/// the outcome; the password accepts either a JSON string or number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<RawPassword>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum RawPassword {
    Text(String),
    Number(serde_json::Number),
}

impl CredentialsRequest {
    /// Normalize the raw body into a credential payload.
    ///
    /// Fails with `MissingCredentials` when either field is absent or a
    /// string that trims to empty. Usernames and string passwords are
    /// trimmed; numeric passwords pass through as-is.
    pub fn try_into_credentials(self) -> Result<Credentials, ApiError> {
        let username = match self.username {
            Some(raw) => Username::new(&raw).map_err(|_| ApiError::MissingCredentials)?,
            None => return Err(ApiError::MissingCredentials),
        };

        let password = match self.password {
            Some(RawPassword::Text(raw)) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(ApiError::MissingCredentials);
                }
                Password::Text(trimmed.to_string())
            }
            Some(RawPassword::Number(number)) => Password::Number(number),
            None => return Err(ApiError::MissingCredentials),
        };

        Ok(Credentials { username, password })
    }
}
