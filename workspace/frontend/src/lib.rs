use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
pub mod common;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod router;
pub mod settings;

use crate::common::auth::AuthProvider;
use crate::common::toast::ToastProvider;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Library Frontend Application Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
