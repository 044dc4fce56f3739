use serde::{Deserialize, Serialize};
use std::fmt;

/// A user record exchanged with the `/user` endpoint
///
/// The identifier is absent when a caller builds the record and is
/// filled in by the server when it accepts one.
///
/// # Examples
///
/// ```
/// use reactsrv::model::User;
///
/// let user = User::new("Test", "test@example.org");
/// assert!(user.id.is_none());
/// assert_eq!(user.to_string(), "User(id=null, name=Test, email=test@example.org)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(id={}, name={}, email={})",
            self.id.as_deref().unwrap_or("null"),
            self.name,
            self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_missing_id_as_null() {
        let user = User::new("Test", "test@example.org");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": null, "name": "Test", "email": "test@example.org"})
        );
    }

    #[test]
    fn test_deserializes_without_id_field() {
        let user: User = serde_json::from_str(r#"{"name":"Test","email":"test@example.org"}"#).unwrap();
        assert_eq!(user, User::new("Test", "test@example.org"));
    }

    #[test]
    fn test_display_with_id() {
        let user = User {
            id: Some("42".to_string()),
            ..User::new("Ann", "ann@example.org")
        };
        assert_eq!(user.to_string(), "User(id=42, name=Ann, email=ann@example.org)");
    }
}
