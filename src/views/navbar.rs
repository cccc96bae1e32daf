use dioxus::prelude::*;
use crate::routes::Route;
use crate::stores::use_theme;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut theme = use_theme();
    let is_dark = theme.read().is_dark();

    let link_class = if is_dark {
        "text-white hover:text-primary transition-colors"
    } else {
        "text-gray-800 hover:text-primary transition-colors"
    };

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: if is_dark {
                    "bg-dark-primary shadow-lg transition-colors duration-200"
                } else {
                    "bg-white shadow-lg transition-colors duration-200"
                },
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        Link { class: link_class, to: Route::TimerPage, "Timer" }
                        Link { class: link_class, to: Route::SettingsPage, "Settings" }
                    }
                    button {
                        class: if is_dark {
                            "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                        } else {
                            "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
                        },
                        onclick: move |_| theme.write().toggle_theme(),
                        if is_dark {
                            "🌞"
                        } else {
                            "🌙"
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
