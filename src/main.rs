use std::rc::Rc;

use dioxus::prelude::*;
use focus_timer::platform::Backends;
use focus_timer::stores::{ SettingsStore, ThemeStore };
use focus_timer::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        let filter = focus_timer::log_filter();
        env_logger::Builder::new()
            .parse_filters(&filter.filter)
            .init();
        filter.report();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger setup failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let backends = use_hook(Backends::detect);
    let theme = use_context_provider(|| Signal::new(ThemeStore::init(&backends)));
    use_context_provider(|| Signal::new(SettingsStore::init(Rc::clone(&backends.storage))));

    rsx! {
        div {
            class: theme.read().state().root_class(),
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
