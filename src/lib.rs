// ============================================================================
// PAWPAL WEB - pet-walking marketplace front end (Yew + WASM)
// ============================================================================
// - Components: Yew views, one per page section
// - ViewModels: form validation and API orchestration
// - Services: HTTP transport, API client, session draft storage
// - State: reducer holding page, selection, auth and loaded data
// - Models: wire types shared with the backend
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod utils;

use crate::components::App;
use crate::config::CONFIG;

/// Mount the app on the document body
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🐾 PawPal ({}) starting against {}", CONFIG.environment, CONFIG.api_base_url());

    yew::Renderer::<App>::new().render();
}
