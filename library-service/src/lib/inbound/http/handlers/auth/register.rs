use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::validation::no_unknown_fields;
use crate::domain::validation::required;
use crate::domain::validation::ValidationError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RegisterRequest>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .register_user(command)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MessageData::new("User registered successfully"),
            )
        })
}

/// Registration payload. Fields stay optional so a missing one is reported
/// as a validation message rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl RegisterRequest {
    /// Validates username, email and password in that order, then unknown keys.
    fn try_into_command(self) -> Result<RegisterUserCommand, ValidationError> {
        let username = Username::new(required("username", self.username)?)?;
        let email = EmailAddress::new(required("email", self.email)?)?;
        let password = Password::new(required("password", self.password)?)?;
        no_unknown_fields(&self.extra)?;
        Ok(RegisterUserCommand::new(username, email, password))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(payload: Value) -> RegisterRequest {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_register_reports_first_failing_field() {
        let err = request(json!({ "email": "bad", "password": "x" }))
            .try_into_command()
            .unwrap_err();
        assert_eq!(err, ValidationError::Required("username"));

        let err = request(json!({ "username": "a", "email": "bad", "password": "x" }))
            .try_into_command()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("email"));

        let err = request(json!({ "username": "a", "email": "a@x.com", "password": "x" }))
            .try_into_command()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "password",
                min: 6
            }
        );
    }

    #[test]
    fn test_register_rejects_unknown_key_after_known_fields() {
        let err = request(json!({
            "username": "a",
            "email": "a@x.com",
            "password": "secret1",
            "role": "admin"
        }))
        .try_into_command()
        .unwrap_err();
        assert_eq!(err, ValidationError::NotAllowed("role".to_string()));

        // A broken known field still wins over the extra key
        let err = request(json!({ "username": "", "role": "admin" }))
            .try_into_command()
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty("username"));
    }

    #[test]
    fn test_register_accepts_valid_payload() {
        let command = request(json!({
            "username": "a",
            "email": "a@x.com",
            "password": "secret1"
        }))
        .try_into_command()
        .unwrap();
        assert_eq!(command.email.as_str(), "a@x.com");
    }
}
