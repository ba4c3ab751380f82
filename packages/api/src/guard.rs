//! Route guard predicate.
//!
//! Decides whether a page may render for the current session. This only
//! shapes navigation; the backend enforces authorization on every request.

use crate::models::Role;
use crate::session::SessionState;

/// What a route requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Storage not read yet; render nothing rather than redirect.
    Pending,
    Redirect(&'static str),
}

pub fn evaluate(session: &SessionState, access: Access) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Allow,
        _ if session.loading => GuardDecision::Pending,
        _ if !session.is_authenticated() => GuardDecision::Redirect(crate::gateway::HOME_PATH),
        Access::Authenticated => GuardDecision::Allow,
        Access::Role(required) if session.role() == Some(required) => GuardDecision::Allow,
        Access::Role(_) => GuardDecision::Redirect(crate::gateway::HOME_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionUser;

    fn session(role: Option<Role>) -> SessionState {
        SessionState {
            token: role.map(|_| "tok".to_string()),
            user: role.map(|role| SessionUser {
                email: "a@b.com".into(),
                role,
            }),
            loading: false,
        }
    }

    #[test]
    fn test_public_always_allowed() {
        assert_eq!(evaluate(&SessionState::default(), Access::Public), GuardDecision::Allow);
    }

    #[test]
    fn test_pending_while_loading() {
        assert_eq!(
            evaluate(&SessionState::default(), Access::Authenticated),
            GuardDecision::Pending
        );
    }

    #[test]
    fn test_anonymous_is_redirected_home() {
        assert_eq!(
            evaluate(&session(None), Access::Authenticated),
            GuardDecision::Redirect("/")
        );
        assert_eq!(
            evaluate(&session(None), Access::Role(Role::Admin)),
            GuardDecision::Redirect("/")
        );
    }

    #[test]
    fn test_role_mismatch_is_redirected_home() {
        assert_eq!(
            evaluate(&session(Some(Role::User)), Access::Role(Role::Admin)),
            GuardDecision::Redirect("/")
        );
        assert_eq!(
            evaluate(&session(Some(Role::Admin)), Access::Role(Role::Admin)),
            GuardDecision::Allow
        );
        assert_eq!(
            evaluate(&session(Some(Role::User)), Access::Authenticated),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_token_without_user_is_not_authenticated() {
        let mut state = session(Some(Role::Admin));
        state.user = None;
        assert_eq!(
            evaluate(&state, Access::Authenticated),
            GuardDecision::Redirect("/")
        );
    }
}
