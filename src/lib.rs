//! # assistant-client
//!
//! Leptos + WASM front end for the AI assistant: sign-in, registration, the
//! main menu, AI chat, and image recognition.
//!
//! This crate owns the route table and the session guard in front of it.
//! Screen contents are mounted by the screens themselves inside the shell
//! rendered by [`pages::ScreenShell`].

pub mod app;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point: logging, config, route table, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::RouterConfig;
    use crate::routes::navigator::Navigator;
    use crate::state::session::{LocalStorageSession, SharedSession};

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }

    let config = match RouterConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("router config rejected: {e}");
            return;
        }
    };
    let session: SharedSession = Arc::new(LocalStorageSession::from_config(&config));
    let navigator = match Navigator::standard(config) {
        Ok(navigator) => Arc::new(navigator),
        Err(e) => {
            leptos::logging::error!("route table rejected: {e}");
            return;
        }
    };
    leptos::logging::log!(
        "router ready: {} routes, base {:?}",
        navigator.table().routes().len(),
        navigator.config().base()
    );

    leptos::mount::mount_to_body(move || view! { <App navigator session/> });
}
