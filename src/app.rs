//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::ScreenShell;
use crate::routes::navigator::{NavigationOutcome, Navigator};
use crate::state::session::SharedSession;

/// Root application component.
///
/// Provides the navigator and session store as context and hands every
/// location to [`RouteOutlet`].
#[component]
pub fn App(navigator: Arc<Navigator>, session: SharedSession) -> impl IntoView {
    provide_meta_context();
    provide_context(navigator);
    provide_context(session);

    view! {
        <Title text="AI Assistant"/>

        <Router>
            <main class="app">
                <RouteOutlet/>
            </main>
        </Router>
    }
}

/// Runs the navigator on every location change and renders the result.
///
/// Denied navigations replace the current history entry with the login
/// path, which re-enters the outlet and renders the login screen.
#[component]
pub fn RouteOutlet() -> impl IntoView {
    let navigator = expect_context::<Arc<Navigator>>();
    let session = expect_context::<SharedSession>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| navigator.navigate(&location.pathname.get(), session.as_ref()));

    Effect::new(move || {
        if let NavigationOutcome::Redirect { href, .. } = outcome.get() {
            navigate(
                &href,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    move || match outcome.get() {
        NavigationOutcome::Render { route, .. } => view! { <ScreenShell screen=route.screen/> }.into_any(),
        NavigationOutcome::Redirect { .. } => {
            view! { <p class="route-outlet__status">"Redirecting to login..."</p> }.into_any()
        }
        NavigationOutcome::NotFound { .. } => {
            view! { <p class="route-outlet__status">"Page not found."</p> }.into_any()
        }
    }
}
