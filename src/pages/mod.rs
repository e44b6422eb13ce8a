//! Screen shell rendered for each routed screen.
//!
//! ARCHITECTURE
//! ============
//! The router only decides *which* screen is shown. Each screen's contents
//! (forms, chat stream, upload widget) mount inside the shell's section,
//! keyed by its `data-screen` slug.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::table::Screen;

/// Title plus an empty, slug-tagged section for `screen`.
#[component]
pub fn ScreenShell(screen: Screen) -> impl IntoView {
    view! {
        <Title text=screen.title()/>
        <section class="screen-shell" data-screen=screen.slug()>
            <h1 class="screen-shell__title">{screen.title()}</h1>
        </section>
    }
}
