//! # API gateway
//!
//! Every backend call goes through [`Gateway::call`]. The gateway owns the
//! cross-cutting policy so endpoint code stays declarative:
//!
//! 1. **Local expiry check.** If a stored token has already expired, the
//!    session is cleared and the call fails with [`ApiError::SessionExpired`]
//!    without touching the network. The login and register endpoints are
//!    exempt since they must work while logged out.
//! 2. **Bearer header.** A present, unexpired token is sent as
//!    `Authorization: Bearer <token>`.
//! 3. **401 / 403.** The session is cleared and the [`Navigator`] performs a
//!    full-page navigation to `/`, discarding all in-memory UI state.
//! 4. **Other non-2xx.** Mapped to [`ApiError::Server`] with the backend's
//!    `message` field, else the raw body, else `Error <status>`.
//! 5. **2xx.** The `{status, message, data}` envelope is unwrapped; bodies
//!    without an envelope are decoded as-is.
//!
//! There are no retries; a failed call surfaces once.

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::KeyValueStore;

use crate::clock::Clock;
use crate::error::ApiError;
use crate::guard::{evaluate, Access, GuardDecision};
use crate::models::ApiEnvelope;
use crate::session::SessionStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Endpoints reachable without a valid session.
pub const PUBLIC_PATHS: [&str; 2] = ["/auth/login", "/auth/register"];

/// Where the gateway sends the user after the backend rejects their credentials.
pub const HOME_PATH: &str = "/";

/// Full-page navigation, as opposed to a router push.
pub trait Navigator {
    fn hard_navigate(&self, path: &str);
}

pub type SharedSession<S> = Rc<RefCell<SessionStore<S>>>;

pub struct Gateway<T, S, N> {
    base_url: String,
    transport: T,
    session: SharedSession<S>,
    navigator: N,
    clock: Clock,
}

impl<T, S, N> Gateway<T, S, N>
where
    T: Transport,
    S: KeyValueStore,
    N: Navigator,
{
    pub fn new(
        base_url: impl Into<String>,
        transport: T,
        session: SharedSession<S>,
        navigator: N,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
            navigator,
            clock: Clock::default(),
        }
    }

    /// Builder method to replace the clock sources.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn session(&self) -> &SharedSession<S> {
        &self.session
    }

    /// Fails with [`ApiError::NotPermitted`] unless the route guard would let the
    /// current session through. Guarded pages call this before fetching so a
    /// role mismatch never reaches the backend's 401/403 handling.
    pub fn authorize(&self, access: Access) -> Result<(), ApiError> {
        match evaluate(self.session.borrow().state(), access) {
            GuardDecision::Allow => Ok(()),
            decision => {
                tracing::debug!("Skipping guarded call for {:?}: {:?}", access, decision);
                Err(ApiError::NotPermitted)
            }
        }
    }

    pub(crate) fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.call::<(), R>(Method::Get, path, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(Method::Post, path, Some(body)).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(Method::Put, path, Some(body)).await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(Method::Patch, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.call::<(), serde_json::Value>(Method::Delete, path, None)
            .await
            .map(|_| ())
    }

    /// Send one request through the full gateway policy.
    pub async fn call<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let public = PUBLIC_PATHS.contains(&path);
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];

        if !public {
            let now = (self.clock.unix)();
            let token = self.session.borrow().token().map(str::to_string);
            if let Some(token) = token {
                if crate::claims::is_token_expired(&token, now) {
                    tracing::warn!("Refusing {} {}: session token expired", method, path);
                    self.session.borrow_mut().logout();
                    return Err(ApiError::SessionExpired);
                }
                headers.push(("Authorization".to_string(), format!("Bearer {token}")));
            }
        }

        let body = match body {
            Some(b) => {
                Some(serde_json::to_string(b).map_err(|e| ApiError::Decode(e.to_string()))?)
            }
            None => None,
        };

        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        };

        tracing::debug!("{} {}", method, request.url);
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, path, e);
            e
        })?;

        self.handle_response(method, path, response)
    }

    fn handle_response<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        response: HttpResponse,
    ) -> Result<R, ApiError> {
        let status = response.status;

        if status == 401 || status == 403 {
            tracing::warn!("{} {} returned {}; resetting session", method, path, status);
            self.session.borrow_mut().logout();
            self.navigator.hard_navigate(HOME_PATH);
            return Err(ApiError::Unauthorized { status });
        }

        if !response.is_success() {
            let message = error_message(status, &response.body);
            tracing::error!("{} {} returned {}: {}", method, path, status, message);
            return Err(ApiError::Server { status, message });
        }

        decode_success(&response.body)
    }
}

/// Backend `message` field, else the raw body, else `Error <status>`.
pub fn error_message(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.trim().is_empty());
    if let Some(message) = from_json {
        return message;
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    format!("Error {status}")
}

fn decode_success<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    match serde_json::from_str::<ApiEnvelope<R>>(body) {
        Ok(envelope) => Ok(envelope.data),
        Err(envelope_err) => serde_json::from_str::<R>(body)
            .map_err(|_| ApiError::Decode(envelope_err.to_string())),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use store::MemoryStore;

    pub const NOW: i64 = 1_700_000_000;

    /// Replays canned responses and records every request.
    #[derive(Default)]
    pub struct FakeTransport {
        pub responses: RefCell<VecDeque<HttpResponse>>,
        pub requests: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        pub fn respond(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back(HttpResponse {
                status,
                body: body.to_string(),
            });
        }

        pub fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for Rc<FakeTransport> {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ApiError::Network("no canned response".into()))
        }
    }

    #[derive(Default)]
    pub struct FakeNavigator {
        pub visits: RefCell<Vec<String>>,
        pub count: Cell<usize>,
    }

    impl Navigator for Rc<FakeNavigator> {
        fn hard_navigate(&self, path: &str) {
            self.count.set(self.count.get() + 1);
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    /// Storage whose writes to `fail_key` are refused; everything else goes to `inner`.
    #[derive(Clone, Default)]
    pub struct FailingStore {
        pub inner: MemoryStore,
        pub fail_key: &'static str,
    }

    impl FailingStore {
        pub fn failing_on(fail_key: &'static str) -> Self {
            Self {
                inner: MemoryStore::new(),
                fail_key,
            }
        }
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), store::StorageError> {
            if key == self.fail_key {
                return Err(store::StorageError::Unavailable);
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key)
        }
    }

    pub type TestGateway<S = MemoryStore> = Gateway<Rc<FakeTransport>, S, Rc<FakeNavigator>>;

    pub struct Harness<S = MemoryStore> {
        pub gateway: TestGateway<S>,
        pub transport: Rc<FakeTransport>,
        pub navigator: Rc<FakeNavigator>,
        pub storage: S,
    }

    fn fixed_now() -> i64 {
        NOW
    }

    fn fixed_local() -> chrono::NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2030, 6, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    pub fn harness<S: KeyValueStore + Clone>(storage: S) -> Harness<S> {
        let transport = Rc::new(FakeTransport::default());
        let navigator = Rc::new(FakeNavigator::default());
        let session = Rc::new(RefCell::new(SessionStore::hydrate(storage.clone())));
        let gateway = Gateway::new(
            "https://restaurant.test/api/",
            transport.clone(),
            session,
            navigator.clone(),
        )
        .with_clock(Clock {
            unix: fixed_now,
            local: fixed_local,
        });
        Harness {
            gateway,
            transport,
            navigator,
            storage,
        }
    }

    pub fn logged_in(exp: i64) -> Harness {
        logged_in_as(crate::models::Role::Admin, exp)
    }

    pub fn logged_in_as(role: crate::models::Role, exp: i64) -> Harness {
        let h = harness(MemoryStore::new());
        let token = crate::claims::make_token(&format!(r#"{{"exp":{exp}}}"#));
        h.gateway.session().borrow_mut().login(
            &token,
            crate::models::SessionUser {
                email: "a@b.com".into(),
                role,
            },
        );
        h
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use store::{MemoryStore, TOKEN_KEY, USER_KEY};

    #[tokio::test]
    async fn test_attaches_bearer_token() {
        let h = logged_in(NOW + 600);
        h.transport.respond(200, r#"{"status":"success","message":"ok","data":[1,2]}"#);

        let data: Vec<u32> = h.gateway.get("/reservations/me").await.unwrap();

        assert_eq!(data, vec![1, 2]);
        let requests = h.transport.requests.borrow();
        assert_eq!(requests[0].url, "https://restaurant.test/api/reservations/me");
        let auth = requests[0].header("authorization").unwrap();
        assert!(auth.starts_with("Bearer "));
    }

    #[tokio::test]
    async fn test_no_header_when_logged_out() {
        let h = harness(MemoryStore::new());
        h.transport.respond(200, r#"{"data":"hi"}"#);

        let data: String = h.gateway.get("/menu").await.unwrap();

        assert_eq!(data, "hi");
        assert!(h.transport.requests.borrow()[0].header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected_without_network() {
        let h = logged_in(NOW - 1);

        let err = h
            .gateway
            .get::<serde_json::Value>("/admin/users")
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::SessionExpired);
        assert_eq!(h.transport.calls(), 0);
        assert!(!h.gateway.session().borrow().is_authenticated());
    }

    #[tokio::test]
    async fn test_public_paths_skip_expiry_check() {
        let h = logged_in(NOW - 1);
        h.transport.respond(200, r#"{"data":null}"#);

        h.gateway
            .post::<_, ()>("/auth/login", &serde_json::json!({}))
            .await
            .unwrap();

        assert_eq!(h.transport.calls(), 1);
        assert!(h.transport.requests.borrow()[0].header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_forbidden_resets_session_once() {
        let h = logged_in(NOW + 600);
        let storage = h.storage.clone();
        h.transport.respond(403, r#"{"message":"Access denied"}"#);

        let err = h
            .gateway
            .get::<serde_json::Value>("/admin/users")
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Unauthorized { status: 403 });
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert_eq!(storage.removal_count(), 2);
        assert_eq!(h.navigator.count.get(), 1);
        assert_eq!(h.navigator.visits.borrow().as_slice(), ["/"]);
    }

    #[tokio::test]
    async fn test_unauthorized_when_logged_out_still_navigates() {
        let h = harness(MemoryStore::new());
        h.transport.respond(401, "");

        let err = h.gateway.get::<serde_json::Value>("/reservations/me").await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized { status: 401 });
        assert_eq!(h.navigator.count.get(), 1);
    }

    #[tokio::test]
    async fn test_server_error_messages() {
        let h = harness(MemoryStore::new());
        h.transport.respond(409, r#"{"message":"Slot already taken"}"#);
        h.transport.respond(500, "upstream exploded");
        h.transport.respond(502, "");

        let mut messages = Vec::new();
        for _ in 0..3 {
            let err = h.gateway.get::<serde_json::Value>("/x").await.unwrap_err();
            messages.push(err.to_string());
        }

        assert_eq!(messages, ["Slot already taken", "upstream exploded", "Error 502"]);
        assert_eq!(h.navigator.count.get(), 0);
    }

    #[tokio::test]
    async fn test_bare_body_without_envelope() {
        let h = harness(MemoryStore::new());
        h.transport.respond(200, r#"[{"a":1}]"#);

        let data: Vec<serde_json::Value> = h.gateway.get("/x").await.unwrap();
        assert_eq!(data.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let h = logged_in(NOW + 600);
        h.transport.respond(204, "");
        h.gateway.delete("/admin/users/1").await.unwrap();
        assert_eq!(h.transport.requests.borrow()[0].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let h = harness(MemoryStore::new());
        h.transport.respond(200, "<html>");
        let err = h.gateway.get::<Vec<u32>>("/x").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_error_message_ignores_blank_message_field() {
        assert_eq!(error_message(400, r#"{"message":"  "}"#), r#"{"message":"  "}"#);
        assert_eq!(error_message(404, "   "), "Error 404");
    }

    #[tokio::test]
    async fn test_customer_on_admin_page_keeps_session() {
        let h = logged_in_as(crate::models::Role::User, NOW + 600);

        let err = h
            .gateway
            .authorize(Access::Role(crate::models::Role::Admin))
            .unwrap_err();

        assert_eq!(err, ApiError::NotPermitted);
        assert_eq!(h.transport.calls(), 0);
        assert_eq!(h.navigator.count.get(), 0);
        assert!(h.gateway.session().borrow().is_authenticated());
        assert!(h.storage.get(TOKEN_KEY).is_some());
    }

    #[test]
    fn test_authorize_follows_guard() {
        let anonymous = harness(MemoryStore::new());
        assert_eq!(
            anonymous.gateway.authorize(Access::Authenticated),
            Err(ApiError::NotPermitted)
        );
        assert_eq!(anonymous.gateway.authorize(Access::Public), Ok(()));

        let admin = logged_in(NOW + 600);
        assert_eq!(admin.gateway.authorize(Access::Authenticated), Ok(()));
        assert_eq!(
            admin.gateway.authorize(Access::Role(crate::models::Role::Admin)),
            Ok(())
        );
        assert_eq!(admin.navigator.count.get(), 0);
    }
}
