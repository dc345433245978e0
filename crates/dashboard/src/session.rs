//! Signed-in session and explicit store context.
//!
//! Sessions come from the hosted auth provider; the dashboard only asks
//! whether there is one. The "current store" is never ambient state: every
//! controller receives a [`StoreContext`] built from the route parameters.

use storepee_core::{StoreId, UserId};
use tracing::debug;

use crate::error::DashboardError;
use crate::navigation::{DashboardRoute, Navigator};

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
}

/// Hosted authentication provider.
pub trait AuthProvider {
    /// Session of the current user, `None` when signed out.
    fn current_session(&self) -> Option<Session>;
}

/// Auth provider with a fixed session, e.g. from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthProvider {
    session: Option<Session>,
}

impl StaticAuthProvider {
    #[must_use]
    pub fn new(user_id: Option<UserId>) -> Self {
        Self {
            session: user_id.map(|user_id| Session { user_id }),
        }
    }
}

impl AuthProvider for StaticAuthProvider {
    fn current_session(&self) -> Option<Session> {
        self.session.clone()
    }
}

/// Require a signed-in session, redirecting to sign-in otherwise.
///
/// # Errors
///
/// Returns `DashboardError::Unauthenticated` after redirecting when there is
/// no session.
pub fn require_session<A, N>(auth: &A, navigator: &N) -> Result<Session, DashboardError>
where
    A: AuthProvider + ?Sized,
    N: Navigator + ?Sized,
{
    auth.current_session().ok_or_else(|| {
        debug!("No session, redirecting to sign-in");
        navigator.push(&DashboardRoute::SignIn);
        DashboardError::Unauthenticated
    })
}

/// The store the dashboard is currently working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreContext {
    pub store_id: StoreId,
}

impl StoreContext {
    #[must_use]
    pub const fn new(store_id: StoreId) -> Self {
        Self { store_id }
    }
}
