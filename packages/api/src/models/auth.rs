use serde::{Deserialize, Serialize};

use super::user::{Role, SessionUser};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    /// Only checked client-side; never sent.
    #[serde(skip)]
    pub confirm_password: String,
}

/// Payload returned by the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

impl From<&AuthResponse> for SessionUser {
    fn from(auth: &AuthResponse) -> Self {
        SessionUser {
            email: auth.email.clone(),
            role: auth.role,
        }
    }
}
