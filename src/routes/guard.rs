//! Pre-navigation access check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per navigation after the target has been resolved and any path
//! redirect followed. The session accessor is passed in rather than read from
//! a global, so the same check runs against browser storage in the app and
//! an in-memory store in tests.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::table::Route;
use crate::state::session::SessionStore;

/// A single navigation attempt: where it goes and what is displayed now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationIntent<'a> {
    pub target: &'a Route,
    /// `None` on the first navigation after startup.
    pub origin: Option<&'a Route>,
}

/// Outcome of [`guard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision<'a> {
    Allow,
    /// The target needs a session and none is present.
    RedirectTo(&'a Route),
}

/// Allow public targets unconditionally; allow gated targets only with a
/// session, otherwise send the navigation to `login`.
///
/// The session store is not consulted for public targets.
pub fn guard<'a>(
    intent: &NavigationIntent<'_>,
    session: &dyn SessionStore,
    login: &'a Route,
) -> GuardDecision<'a> {
    if !intent.target.requires_auth || session.has_session() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectTo(login)
    }
}
