//! Per-navigation pipeline: path → table → guard → outcome.
//!
//! DESIGN
//! ======
//! The navigator remembers which route is on screen so each intent carries
//! its origin. That index is the only mutable state and is held in an atomic,
//! so `navigate` takes `&self` and a single `Arc<Navigator>` can be shared
//! through reactive context without locking.
//!
//! Paths arrive already split from query and fragment by `leptos_router`
//! (`use_location().pathname`), so matching sees the bare path.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::RouterConfig;
use crate::error::RouteTableError;
use crate::routes::guard::{GuardDecision, NavigationIntent, guard};
use crate::routes::table::{Resolution, Route, RouteTable};
use crate::state::session::SessionStore;

const NO_ROUTE: usize = usize::MAX;

/// What the outlet should do after a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Show `route`. `redirected_from` is set when a path redirect was followed.
    Render {
        route: Route,
        redirected_from: Option<String>,
    },
    /// The guard denied `denied`; replace the location with `href` (the login route).
    Redirect {
        denied: Route,
        to: Route,
        href: String,
    },
    /// No route at `path`, or `path` is outside the deploy base.
    NotFound { path: String },
}

/// Route table plus the route currently on screen.
#[derive(Debug)]
pub struct Navigator {
    table: RouteTable,
    config: RouterConfig,
    current: AtomicUsize,
}

impl Navigator {
    #[must_use]
    pub fn new(table: RouteTable, config: RouterConfig) -> Self {
        Self {
            table,
            config,
            current: AtomicUsize::new(NO_ROUTE),
        }
    }

    /// Navigator over [`RouteTable::standard`].
    ///
    /// # Errors
    ///
    /// Propagates [`RouteTableError`] when `config` names an unusable login path.
    pub fn standard(config: RouterConfig) -> Result<Self, RouteTableError> {
        let table = RouteTable::standard(&config)?;
        Ok(Self::new(table, config))
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Route currently on screen; `None` before the first successful navigation.
    #[must_use]
    pub fn current(&self) -> Option<&Route> {
        self.table.route_at(self.current.load(Ordering::Relaxed))
    }

    /// Evaluate one navigation to the browser path `pathname`.
    ///
    /// Path redirects are followed before the guard runs. Only an allowed
    /// navigation changes the current route: a denial leaves the previous
    /// screen as origin for the follow-up login navigation, and `NotFound`
    /// changes nothing.
    pub fn navigate(&self, pathname: &str, session: &dyn SessionStore) -> NavigationOutcome {
        let Some(path) = self.config.strip_base(pathname) else {
            leptos::logging::warn!("navigate: {pathname} is outside base {}", self.config.base());
            return NavigationOutcome::NotFound {
                path: pathname.to_owned(),
            };
        };

        let (target, redirected_from) = match self.table.resolve(path) {
            Resolution::Route(route) => (route, None),
            Resolution::Redirect { from, to } => {
                leptos::logging::log!("navigate: {from} redirects to {}", to.path);
                (to, Some(from.to_owned()))
            }
            Resolution::NotFound => {
                leptos::logging::warn!("navigate: no route for {path}");
                return NavigationOutcome::NotFound {
                    path: path.to_owned(),
                };
            }
        };

        let intent = NavigationIntent {
            target,
            origin: self.current(),
        };
        match guard(&intent, session, self.table.login()) {
            GuardDecision::Allow => {
                leptos::logging::log!(
                    "navigate: {} -> {}",
                    intent.origin.map_or("<start>", |r| r.path.as_str()),
                    target.path
                );
                self.set_current(target);
                NavigationOutcome::Render {
                    route: target.clone(),
                    redirected_from,
                }
            }
            GuardDecision::RedirectTo(login) => {
                leptos::logging::warn!(
                    "navigate: {} requires a session; redirecting to {}",
                    target.path,
                    login.path
                );
                NavigationOutcome::Redirect {
                    denied: target.clone(),
                    to: login.clone(),
                    href: self.config.href(&login.path),
                }
            }
        }
    }

    fn set_current(&self, route: &Route) {
        if let Some(index) = self.table.position(&route.path) {
            self.current.store(index, Ordering::Relaxed);
        }
    }
}
