use serde_json::json;
use store::KeyValueStore;

use crate::error::ApiError;
use crate::gateway::{Gateway, Navigator};
use crate::models::{AdminUser, UserActivity, UserRequest};
use crate::transport::Transport;
use crate::validation::validate_user;

impl<T, S, N> Gateway<T, S, N>
where
    T: Transport,
    S: KeyValueStore,
    N: Navigator,
{
    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get("/admin/users").await
    }

    pub async fn admin_user(&self, id: i64) -> Result<AdminUser, ApiError> {
        self.get(&format!("/admin/users/{id}")).await
    }

    pub async fn create_user(&self, request: &UserRequest) -> Result<AdminUser, ApiError> {
        validate_user(request, true)?;
        self.post("/admin/users", request).await
    }

    /// A blank password is dropped so the backend keeps the current one.
    pub async fn update_user(&self, id: i64, request: &UserRequest) -> Result<AdminUser, ApiError> {
        validate_user(request, false)?;
        let mut request = request.clone();
        if request.password.as_deref().is_some_and(str::is_empty) {
            request.password = None;
        }
        self.put(&format!("/admin/users/{id}"), &request).await
    }

    pub async fn set_user_enabled(&self, id: i64, enabled: bool) -> Result<AdminUser, ApiError> {
        self.patch(
            &format!("/admin/users/{id}/enabled"),
            &json!({ "enabled": enabled }),
        )
        .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/users/{id}")).await
    }

    pub async fn user_activities(&self, id: i64) -> Result<Vec<UserActivity>, ApiError> {
        self.get(&format!("/admin/users/{id}/activities")).await
    }
}
