use dioxus::prelude::*;
use crate::stores::use_settings;

#[component]
fn DurationCard(label: String, minutes: i64) -> Element {
    rsx! {
        div {
            class: "rounded-lg shadow p-4 text-center",
            div { class: "text-sm text-gray-500", "{label}" }
            div { class: "text-3xl font-bold", "{minutes} min" }
        }
    }
}

#[component]
pub fn TimerPage() -> Element {
    let settings = use_settings().read().settings();

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Focus Timer"
            }
            div {
                class: "grid grid-cols-3 gap-4",
                DurationCard { label: "Work", minutes: settings.work_duration }
                DurationCard { label: "Short break", minutes: settings.short_break_duration }
                DurationCard { label: "Long break", minutes: settings.long_break_duration }
            }
        }
    }
}
