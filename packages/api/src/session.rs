//! # Session store
//!
//! [`SessionStore`] is the client's belief about who is logged in. It keeps the
//! bearer token and a reduced [`SessionUser`] in memory and mirrors both into a
//! [`KeyValueStore`] under [`TOKEN_KEY`] and [`USER_KEY`].
//!
//! ## Lifecycle
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`hydrate`](SessionStore::hydrate) | Reads both keys. A user value that is not valid JSON is removed and read as "no user". |
//! | [`login`](SessionStore::login) | Empty token: logged and ignored. Otherwise writes token + `{email, role}` and replaces the state; a refused write clears both keys and logs out. |
//! | [`logout`](SessionStore::logout) | Removes both keys and clears the state. Idempotent. |
//! | [`check_expiry`](SessionStore::check_expiry) | Decodes the token's `exp`; logs out when it has passed. Run once right after hydration. |
//! | [`tick`](SessionStore::tick) | The periodic check: does nothing without a token, otherwise `check_expiry`. |
//!
//! Nothing here returns an error: storage and decode failures all degrade to
//! the logged-out state.
//!
//! A listener registered with [`on_change`](SessionStore::on_change) sees every
//! state replacement, which is how the UI signal stays in sync when the gateway
//! clears the session on its own.

use store::{KeyValueStore, StorageError, TOKEN_KEY, USER_KEY};

use crate::claims::is_token_expired;
use crate::models::{Role, SessionUser};

/// Snapshot of the session as the UI sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    /// True until durable storage has been read.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role() == Some(Role::Admin)
    }
}

type Listener = Box<dyn Fn(&SessionState)>;

pub struct SessionStore<S> {
    storage: S,
    state: SessionState,
    listener: Option<Listener>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Build the session from whatever a previous page load left in storage.
    pub fn hydrate(storage: S) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = match storage.get(USER_KEY) {
            Some(raw) => match serde_json::from_str::<SessionUser>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Discarding unreadable stored user: {}", e);
                    storage.remove(USER_KEY);
                    None
                }
            },
            None => None,
        };

        Self {
            storage,
            state: SessionState {
                token,
                user,
                loading: false,
            },
            listener: None,
        }
    }

    /// Register the single state-change listener, replacing any previous one.
    pub fn on_change(&mut self, listener: impl Fn(&SessionState) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin()
    }

    /// Start a session. Returns `false` for an empty token, and when storage
    /// refuses either write; both keys are then cleared and the session ends
    /// up logged out.
    pub fn login(&mut self, token: &str, user: impl Into<SessionUser>) -> bool {
        if token.is_empty() {
            tracing::warn!("login called without a token; ignoring");
            return false;
        }
        let user: SessionUser = user.into();

        if let Err(e) = self.persist(token, &user) {
            tracing::error!("Failed to persist session for {}: {}", user.email, e);
            self.logout();
            return false;
        }

        tracing::info!("Logged in as {} ({})", user.email, user.role);
        self.replace(SessionState {
            token: Some(token.to_string()),
            user: Some(user),
            loading: false,
        });
        true
    }

    fn persist(&self, token: &str, user: &SessionUser) -> Result<(), StorageError> {
        let json = serde_json::to_string(user).map_err(|e| StorageError::Write {
            key: USER_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &json)
    }

    /// End the session. Safe to call when already logged out.
    pub fn logout(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        if self.state.token.is_some() || self.state.user.is_some() {
            tracing::info!("Logged out");
        }
        self.replace(SessionState {
            token: None,
            user: None,
            loading: false,
        });
    }

    /// Whether the current token (if any) is expired at unix time `now`.
    pub fn is_token_expired(&self, now: i64) -> bool {
        self.token().is_some_and(|t| is_token_expired(t, now))
    }

    /// Log out if the token has expired. Returns `true` when a logout happened.
    pub fn check_expiry(&mut self, now: i64) -> bool {
        if self.is_token_expired(now) {
            tracing::info!("Session token expired");
            self.logout();
            true
        } else {
            false
        }
    }

    /// One iteration of the periodic expiry loop. Returns `true` when it logged out.
    pub fn tick(&mut self, now: i64) -> bool {
        if self.token().is_none() {
            return false;
        }
        self.check_expiry(now)
    }

    fn replace(&mut self, state: SessionState) {
        self.state = state;
        if let Some(listener) = &self.listener {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::make_token;
    use crate::gateway::testing::FailingStore;
    use crate::models::AuthResponse;
    use std::cell::Cell;
    use std::rc::Rc;
    use store::MemoryStore;

    const NOW: i64 = 1_700_000_000;

    fn admin() -> SessionUser {
        SessionUser {
            email: "a@b.com".into(),
            role: Role::Admin,
        }
    }

    fn live_token() -> String {
        make_token(&format!(r#"{{"exp":{}}}"#, NOW + 3600))
    }

    #[test]
    fn test_hydrate_empty_storage() {
        let session = SessionStore::hydrate(MemoryStore::new());
        assert!(!session.state().loading);
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_hydrate_restores_session() {
        let storage = MemoryStore::with_values([
            (TOKEN_KEY, "tok"),
            (USER_KEY, r#"{"email":"a@b.com","role":"ADMIN"}"#),
        ]);
        let session = SessionStore::hydrate(storage);
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert_eq!(session.token(), Some("tok"));
    }

    #[test]
    fn test_hydrate_discards_corrupt_user() {
        let storage = MemoryStore::with_values([(TOKEN_KEY, "tok"), (USER_KEY, "not-json")]);
        let session = SessionStore::hydrate(storage.clone());
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[test]
    fn test_login_with_empty_token_changes_nothing() {
        let storage = MemoryStore::new();
        let mut session = SessionStore::hydrate(storage.clone());
        let before = session.state().clone();

        assert!(!session.login("", admin()));

        assert_eq!(session.state(), &before);
        assert!(storage.is_empty());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_login_persists_reduced_user() {
        let storage = MemoryStore::new();
        let mut session = SessionStore::hydrate(storage.clone());
        let response = AuthResponse {
            token: "tok".into(),
            email: "a@b.com".into(),
            role: Role::User,
            name: Some("Ada".into()),
            surname: Some("Lovelace".into()),
        };

        assert!(session.login(&response.token, &response));

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok"));
        let stored: serde_json::Value =
            serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(stored, serde_json::json!({"email": "a@b.com", "role": "USER"}));
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_logout_clears_everything_and_is_idempotent() {
        let storage = MemoryStore::new();
        let mut session = SessionStore::hydrate(storage.clone());
        session.login("tok", admin());

        session.logout();
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert!(!session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(storage.removal_count(), 2);
    }

    #[test]
    fn test_check_expiry_logs_out_expired_token() {
        let storage = MemoryStore::new();
        let mut session = SessionStore::hydrate(storage.clone());
        session.login(&make_token(&format!(r#"{{"exp":{}}}"#, NOW - 5)), admin());

        assert!(session.check_expiry(NOW));
        assert!(!session.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_check_expiry_keeps_live_token() {
        let mut session = SessionStore::hydrate(MemoryStore::new());
        session.login(&live_token(), admin());
        assert!(!session.check_expiry(NOW));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_check_expiry_without_token_is_noop() {
        let mut session = SessionStore::hydrate(MemoryStore::new());
        assert!(!session.check_expiry(NOW));
    }

    #[test]
    fn test_listener_sees_changes() {
        let calls = Rc::new(Cell::new(0));
        let mut session = SessionStore::hydrate(MemoryStore::new());
        let seen = calls.clone();
        session.on_change(move |_| seen.set(seen.get() + 1));

        session.login(&live_token(), admin());
        session.logout();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_refused_token_write_leaves_session_logged_out() {
        let storage = FailingStore::failing_on(TOKEN_KEY);
        let mut session = SessionStore::hydrate(storage.clone());

        assert!(!session.login(&live_token(), admin()));

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(storage.inner.is_empty());
    }

    #[test]
    fn test_refused_user_write_removes_stored_token() {
        let storage = FailingStore::failing_on(USER_KEY);
        let mut session = SessionStore::hydrate(storage.clone());

        assert!(!session.login(&live_token(), admin()));

        assert!(!session.is_authenticated());
        assert!(storage.inner.get(TOKEN_KEY).is_none());
        assert!(storage.inner.get(USER_KEY).is_none());
    }

    #[test]
    fn test_refused_write_replaces_previous_session() {
        let storage = FailingStore::failing_on(USER_KEY);
        storage.inner.set(TOKEN_KEY, "old").unwrap();
        storage
            .inner
            .set(USER_KEY, r#"{"email":"old@b.com","role":"USER"}"#)
            .unwrap();
        let mut session = SessionStore::hydrate(storage.clone());
        assert!(session.is_authenticated());

        assert!(!session.login(&live_token(), admin()));

        assert!(!session.is_authenticated());
        assert!(storage.inner.is_empty());
    }

    #[test]
    fn test_startup_check_clears_expired_stored_session() {
        let expired = make_token(&format!(r#"{{"exp":{}}}"#, NOW - 60));
        let storage = MemoryStore::with_values([
            (TOKEN_KEY, expired.as_str()),
            (USER_KEY, r#"{"email":"a@b.com","role":"USER"}"#),
        ]);
        let mut session = SessionStore::hydrate(storage.clone());
        assert!(session.is_authenticated());

        assert!(session.check_expiry(NOW));

        assert!(!session.is_authenticated());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[test]
    fn test_tick_without_token_touches_nothing() {
        let storage = MemoryStore::new();
        let calls = Rc::new(Cell::new(0));
        let mut session = SessionStore::hydrate(storage.clone());
        let seen = calls.clone();
        session.on_change(move |_| seen.set(seen.get() + 1));

        assert!(!session.tick(NOW));

        assert_eq!(calls.get(), 0);
        assert_eq!(storage.removal_count(), 0);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_tick_logs_out_once_token_expires() {
        let mut session = SessionStore::hydrate(MemoryStore::new());
        session.login(&make_token(&format!(r#"{{"exp":{}}}"#, NOW + 300)), admin());

        assert!(!session.tick(NOW));
        assert!(session.is_authenticated());

        assert!(session.tick(NOW + 300));
        assert!(!session.is_authenticated());
    }
}
