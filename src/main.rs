mod components;
mod config;
mod dom;
mod error;
mod model;
mod state;
mod util;

use components::app::{App, AppProps};
use config::SiteConfig;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // Start verbose so config warnings are visible, then narrow to the configured level.
        wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    }
    let config = SiteConfig::load();
    log::set_max_level(config.log_level());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
