//! Construction-time errors for the route table and router configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation itself never fails: a denied navigation is a redirect, an
//! unknown path is `NotFound`. Only building the table or loading config can
//! be rejected, once, at startup.

/// Error returned by [`crate::routes::table::RouteTable::new`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// A route or redirect path does not start with `/`.
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),
    /// Two routes share a name.
    #[error("duplicate route name: {0}")]
    DuplicateName(String),
    /// Two routes share a path.
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    /// Two redirects share a source path.
    #[error("duplicate redirect source: {0}")]
    DuplicateRedirect(String),
    /// A redirect source is also the path of a route.
    #[error("redirect source {0} shadows a declared route")]
    RedirectShadowsRoute(String),
    /// A redirect points at a path with no route.
    #[error("redirect {from} -> {to} targets an undeclared route")]
    UnknownRedirectTarget { from: String, to: String },
    /// No route is declared at the configured login path.
    #[error("no route declared at login path {0}")]
    MissingLoginRoute(String),
    /// The login route is itself gated, so a denied navigation could never land.
    #[error("login route {0} must not require authentication")]
    LoginRequiresAuth(String),
}

/// Error returned when loading a [`crate::config::RouterConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config document is not valid JSON for `RouterConfig`.
    #[error("failed to parse router config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The deploy base is not an absolute path prefix.
    #[error("base must be empty or start with '/': {0:?}")]
    InvalidBase(String),
    /// The login path is not absolute.
    #[error("login path must start with '/': {0:?}")]
    InvalidLoginPath(String),
    /// The storage key is blank.
    #[error("session storage key must not be empty")]
    EmptyStorageKey,
}
