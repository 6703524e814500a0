use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::{Route, Router, Routes};

mod components;
pub mod config;
pub mod error;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::issues::IssuesPage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    log::info!("Starting issuewatch frontend (wasm)");

    let cfg = config::runtime_config();
    log::debug!(
        "runtime config: debounce={}ms, mobile breakpoint={}px",
        cfg.filter_debounce_ms,
        cfg.mobile_breakpoint_px
    );

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    state::viewport::provide_viewport();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=IssuesPage/>
                <Route path="/issues" view=IssuesPage/>
            </Routes>
        </Router>
    }
}
