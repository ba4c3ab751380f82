//! Per-user audit log entries shown on the admin user detail page.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Login,
    Logout,
    LoginFailed,
    Register,
    EmailVerified,
    PasswordChanged,
    PasswordResetRequested,
    ProfileUpdated,
    RoleChanged,
    AccountEnabled,
    AccountDisabled,
    AccountDeleted,
    ReservationCreated,
    ReservationUpdated,
    ReservationCancelled,
    /// Any value this client does not know about yet.
    #[serde(other)]
    Other,
}

impl ActivityType {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Login => "Login",
            ActivityType::Logout => "Logout",
            ActivityType::LoginFailed => "Failed login",
            ActivityType::Register => "Registered",
            ActivityType::EmailVerified => "Email verified",
            ActivityType::PasswordChanged => "Password changed",
            ActivityType::PasswordResetRequested => "Password reset requested",
            ActivityType::ProfileUpdated => "Profile updated",
            ActivityType::RoleChanged => "Role changed",
            ActivityType::AccountEnabled => "Account enabled",
            ActivityType::AccountDisabled => "Account disabled",
            ActivityType::AccountDeleted => "Account deleted",
            ActivityType::ReservationCreated => "Reservation created",
            ActivityType::ReservationUpdated => "Reservation updated",
            ActivityType::ReservationCancelled => "Reservation cancelled",
            ActivityType::Other => "Other",
        }
    }

    /// Failed logins and account removals are highlighted in the log.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            ActivityType::LoginFailed | ActivityType::AccountDisabled | ActivityType::AccountDeleted
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub activity_type: ActivityType,
    #[serde(default)]
    pub description: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub performed_by_user_name: Option<String>,
}

impl UserActivity {
    pub fn display_time(&self) -> String {
        self.created_at.format("%d/%m/%Y %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_activity_type_decodes_as_other() {
        let json = r#"[
            {"activityType": "LOGIN_FAILED", "description": "bad password", "createdAt": "2024-01-01T10:00:00"},
            {"activityType": "SOMETHING_NEW", "createdAt": "2024-01-02T10:00:00", "performedByUserName": "admin"}
        ]"#;
        let log: Vec<UserActivity> = serde_json::from_str(json).unwrap();
        assert_eq!(log[0].activity_type, ActivityType::LoginFailed);
        assert!(log[0].activity_type.is_warning());
        assert_eq!(log[1].activity_type, ActivityType::Other);
        assert_eq!(log[1].performed_by_user_name.as_deref(), Some("admin"));
    }
}
