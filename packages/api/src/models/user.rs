//! # User records
//!
//! Two views of a user cross the client:
//!
//! - [`SessionUser`]: the reduced `{email, role}` record kept in the session and
//!   persisted under [`store::USER_KEY`]. Anything else the backend returns at
//!   login is dropped before it reaches storage.
//! - [`AdminUser`]: the full record shown in the back-office tables.
//!
//! [`Role`] gates which routes and controls render. It is a UX hint only; the
//! backend re-checks authorization on every request.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user as the session knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A user as listed in the admin back-office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub surname: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
    #[serde(default)]
    pub reservations_count: u32,
}

impl AdminUser {
    /// Display-only "Name Surname".
    pub fn full_name(&self) -> String {
        match (self.name.trim(), self.surname.trim()) {
            (n, "") => n.to_string(),
            ("", s) => s.to_string(),
            (n, s) => format!("{n} {s}"),
        }
    }

    pub fn display_created(&self) -> String {
        display_timestamp(self.created_at)
    }

    pub fn display_last_login(&self) -> String {
        display_timestamp(self.last_login)
    }
}

fn display_timestamp(t: Option<NaiveDateTime>) -> String {
    t.map(|t| t.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}

/// Create/update payload for the admin user form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    /// Required on create, optional on update (blank keeps the current password).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    pub enabled: bool,
}

impl From<&AdminUser> for UserRequest {
    fn from(user: &AdminUser) -> Self {
        Self {
            name: user.name.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            password: None,
            role: user.role,
            enabled: user.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_user_from_backend_json() {
        let json = r#"{
            "id": 7,
            "name": "Ada",
            "surname": "Lovelace",
            "email": "ada@example.com",
            "role": "ADMIN",
            "enabled": true,
            "emailVerified": false,
            "createdAt": "2024-03-01T12:30:00",
            "lastLogin": null,
            "reservationsCount": 4
        }"#;
        let user: AdminUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(user.reservations_count, 4);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_full_name_with_missing_parts() {
        let mut user: AdminUser = serde_json::from_str(
            r#"{"id": 1, "name": "Solo", "email": "s@x.io", "role": "USER"}"#,
        )
        .unwrap();
        assert_eq!(user.full_name(), "Solo");
        user.name.clear();
        user.surname = "Last".into();
        assert_eq!(user.full_name(), "Last");
    }

    #[test]
    fn test_update_request_omits_blank_password() {
        let request = UserRequest {
            name: "A".into(),
            surname: "B".into(),
            email: "a@b.co".into(),
            password: None,
            role: Role::User,
            enabled: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "USER");
    }
}
