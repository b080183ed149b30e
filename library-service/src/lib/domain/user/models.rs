use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::validation::non_empty;
use crate::domain::validation::ValidationError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered user. The password hash never leaves the domain
/// and repository layers.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type. Any non-empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const FIELD: &'static str = "username";

    /// # Errors
    /// * `Empty` - Username is an empty string
    pub fn new(username: String) -> Result<Self, ValidationError> {
        non_empty(Self::FIELD, username).map(Self)
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

/// Email address type
///
/// Validates email format using an RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const FIELD: &'static str = "email";

    /// # Errors
    /// * `Empty` - Email is an empty string
    /// * `InvalidEmail` - Email does not conform to RFC 5322, or its domain
    ///   is not a dotted host name (`a@localhost`, `a@[10.0.0.1]`)
    pub fn new(email: String) -> Result<Self, ValidationError> {
        let email = non_empty(Self::FIELD, email)?;
        let parsed = email_address::EmailAddress::from_str(&email)
            .map_err(|_| ValidationError::InvalidEmail(Self::FIELD))?;

        if !Self::is_dotted_host(parsed.domain()) {
            return Err(ValidationError::InvalidEmail(Self::FIELD));
        }
        Ok(EmailAddress(email))
    }

    /// At least two non-empty labels and a top-level label of two or more letters.
    fn is_dotted_host(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        let tld = labels.last().copied().unwrap_or_default();

        labels.len() >= 2
            && labels.iter().all(|label| !label.is_empty())
            && tld.len() >= 2
            && tld.chars().all(|c| c.is_ascii_alphabetic())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password as submitted by the client, at least 6 characters.
///
/// Only ever hashed or verified; never stored or logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const FIELD: &'static str = "password";
    const MIN_LENGTH: usize = 6;

    /// # Errors
    /// * `Empty` - Password is an empty string
    /// * `TooShort` - Fewer than 6 characters
    pub fn new(password: String) -> Result<Self, ValidationError> {
        let password = non_empty(Self::FIELD, password)?;
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(ValidationError::TooShort {
                field: Self::FIELD,
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Command to register a new user with validated fields
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterUserCommand {
    pub fn new(username: Username, email: EmailAddress, password: Password) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Command to exchange credentials for an access token
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: Password,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_single_character() {
        assert_eq!(Username::new("a".to_string()).unwrap().as_str(), "a");
    }

    #[test]
    fn test_username_rejects_empty() {
        assert_eq!(
            Username::new(String::new()),
            Err(ValidationError::Empty("username"))
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("a@x.com".to_string()).is_ok());
        assert_eq!(
            EmailAddress::new("not-an-email".to_string()),
            Err(ValidationError::InvalidEmail("email"))
        );
        assert_eq!(
            EmailAddress::new(String::new()),
            Err(ValidationError::Empty("email"))
        );
    }

    #[test]
    fn test_email_requires_dotted_domain() {
        assert!(EmailAddress::new("reader@mail.example.org".to_string()).is_ok());
        for email in ["a@localhost", "a@[10.0.0.1]", "a@x.c", "a@x.123"] {
            assert_eq!(
                EmailAddress::new(email.to_string()),
                Err(ValidationError::InvalidEmail("email")),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(Password::new("secret".to_string()).is_ok());
        assert_eq!(
            Password::new("short".to_string()),
            Err(ValidationError::TooShort {
                field: "password",
                min: 6
            })
        );
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("secret1".to_string()).unwrap();
        assert_eq!(format!("{:?}", password), "Password(***)");
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        assert_eq!(UserId::from_string(&id.to_string()), Ok(id));
        assert!(UserId::from_string("42").is_err());
    }
}
