use store::KeyValueStore;

use crate::error::ApiError;
use crate::gateway::{Gateway, Navigator};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::transport::Transport;
use crate::validation::{validate_login, validate_registration};

impl<T, S, N> Gateway<T, S, N>
where
    T: Transport,
    S: KeyValueStore,
    N: Navigator,
{
    /// Validate, authenticate, and start a session from the returned token.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        validate_login(request)?;
        let response: AuthResponse = self.post("/auth/login", request).await?;
        self.start_session(&response)?;
        Ok(response)
    }

    /// Validate, create the account, and start a session from the returned token.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        validate_registration(request)?;
        let response: AuthResponse = self.post("/auth/register", request).await?;
        self.start_session(&response)?;
        Ok(response)
    }

    /// Client-side logout. The backend holds no session to revoke.
    pub fn logout(&self) {
        self.session().borrow_mut().logout();
    }

    fn start_session(&self, response: &AuthResponse) -> Result<(), ApiError> {
        if response.token.is_empty() {
            tracing::error!("Backend returned an empty token for {}", response.email);
            return Err(ApiError::SessionNotStarted);
        }
        if self.session().borrow_mut().login(&response.token, response) {
            Ok(())
        } else {
            Err(ApiError::SessionNotStarted)
        }
    }
}
