//! Declarative route table: path → screen bindings plus path redirects.
//!
//! DESIGN
//! ======
//! The table is built once at startup and never mutated. Every structural
//! rule (unique names and paths, redirect targets exist, login is reachable
//! without a session) is checked in [`RouteTable::new`], so lookups at
//! navigation time cannot fail beyond `NotFound`.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::RouterConfig;
use crate::error::RouteTableError;

/// Opaque handle to the screen a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Login,
    Register,
    Menu,
    AiChat,
    ImageRecognition,
}

impl Screen {
    /// Stable identifier used in markup (`data-screen`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Menu => "menu",
            Self::AiChat => "ai-chat",
            Self::ImageRecognition => "image-recognition",
        }
    }

    /// Human-readable document title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
            Self::Menu => "Menu",
            Self::AiChat => "AI Chat",
            Self::ImageRecognition => "Image Recognition",
        }
    }
}

/// A named binding from an exact path to a screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub screen: Screen,
    /// Navigation is only allowed while a session token is present.
    #[serde(default)]
    pub requires_auth: bool,
}

impl Route {
    /// Public route (no session required).
    pub fn new(path: impl Into<String>, name: impl Into<String>, screen: Screen) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            screen,
            requires_auth: false,
        }
    }

    /// Mark the route as session-gated.
    #[must_use]
    pub fn requiring_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

/// A path with no screen of its own that forwards to a declared route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

impl Redirect {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result of looking a path up in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path is bound to a route.
    Route(&'a Route),
    /// The path is a redirect source; `to` is the route it forwards to.
    Redirect { from: &'a str, to: &'a Route },
    /// Nothing is declared at the path.
    NotFound,
}

/// Immutable, validated set of routes and redirects.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    redirects: Vec<Redirect>,
    login: usize,
}

impl RouteTable {
    /// Validate and build a table. `login_path` names the route denied
    /// navigations are sent to.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteTableError`] rule the declarations break.
    pub fn new(
        routes: Vec<Route>,
        redirects: Vec<Redirect>,
        login_path: &str,
    ) -> Result<Self, RouteTableError> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();
        for route in &routes {
            check_path(&route.path)?;
            if !names.insert(route.name.as_str()) {
                return Err(RouteTableError::DuplicateName(route.name.clone()));
            }
            if !paths.insert(route.path.as_str()) {
                return Err(RouteTableError::DuplicatePath(route.path.clone()));
            }
        }

        let mut sources = HashSet::new();
        for redirect in &redirects {
            check_path(&redirect.from)?;
            check_path(&redirect.to)?;
            if paths.contains(redirect.from.as_str()) {
                return Err(RouteTableError::RedirectShadowsRoute(redirect.from.clone()));
            }
            if !sources.insert(redirect.from.as_str()) {
                return Err(RouteTableError::DuplicateRedirect(redirect.from.clone()));
            }
            if !paths.contains(redirect.to.as_str()) {
                return Err(RouteTableError::UnknownRedirectTarget {
                    from: redirect.from.clone(),
                    to: redirect.to.clone(),
                });
            }
        }

        let Some(login) = routes.iter().position(|r| r.path == login_path) else {
            return Err(RouteTableError::MissingLoginRoute(login_path.to_owned()));
        };
        if routes[login].requires_auth {
            return Err(RouteTableError::LoginRequiresAuth(login_path.to_owned()));
        }

        Ok(Self {
            routes,
            redirects,
            login,
        })
    }

    /// The application's route table: `/` forwards to the login path, sign-in
    /// and registration are public, the three working screens need a session.
    ///
    /// # Errors
    ///
    /// Fails only when `config` names a login path that is not one of the
    /// public routes.
    pub fn standard(config: &RouterConfig) -> Result<Self, RouteTableError> {
        let routes = vec![
            Route::new("/login", "Login", Screen::Login),
            Route::new("/register", "Register", Screen::Register),
            Route::new("/menu", "Menu", Screen::Menu).requiring_auth(),
            Route::new("/ai-chat", "AIChat", Screen::AiChat).requiring_auth(),
            Route::new("/image-recognition", "ImageRecognition", Screen::ImageRecognition)
                .requiring_auth(),
        ];
        let redirects = vec![Redirect::new("/", config.login_path())];
        Self::new(routes, redirects, config.login_path())
    }

    /// Exact-match lookup. Redirect sources are checked first and forward to
    /// their target route without consulting any guard.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        if let Some(redirect) = self.redirects.iter().find(|r| r.from == path) {
            return match self.find(&redirect.to) {
                Some(to) => Resolution::Redirect {
                    from: &redirect.from,
                    to,
                },
                None => Resolution::NotFound,
            };
        }
        match self.find(path) {
            Some(route) => Resolution::Route(route),
            None => Resolution::NotFound,
        }
    }

    /// The route denied navigations land on.
    #[must_use]
    pub fn login(&self) -> &Route {
        &self.routes[self.login]
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn redirects(&self) -> &[Redirect] {
        &self.redirects
    }

    /// Look a route up by its name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub(crate) fn position(&self, path: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.path == path)
    }

    pub(crate) fn route_at(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }
}

fn check_path(path: &str) -> Result<(), RouteTableError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(RouteTableError::InvalidPath(path.to_owned()))
    }
}
