use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::domain::validation::no_unknown_fields;
use crate::domain::validation::required;
use crate::domain::validation::ValidationError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<ApiSuccess<TokenData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .login(command)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, TokenData { token }))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ValidationError> {
        let email = EmailAddress::new(required("email", self.email)?)?;
        let password = Password::new(required("password", self.password)?)?;
        no_unknown_fields(&self.extra)?;
        Ok(LoginCommand { email, password })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_login_requires_password() {
        let request: LoginRequest = serde_json::from_value(json!({ "email": "a@x.com" })).unwrap();

        let err = request.try_into_command().unwrap_err();
        assert_eq!(err, ValidationError::Required("password"));
    }

    #[test]
    fn test_login_rejects_unknown_key() {
        let request: LoginRequest = serde_json::from_value(json!({
            "email": "a@x.com",
            "password": "secret1",
            "remember": true
        }))
        .unwrap();

        let err = request.try_into_command().unwrap_err();
        assert_eq!(err, ValidationError::NotAllowed("remember".to_string()));
    }
}
