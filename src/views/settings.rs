use dioxus::prelude::*;
use crate::stores::use_settings;
use crate::utils::TimerSettingsPatch;

#[component]
fn DurationInput(label: String, value: i64, on_change: EventHandler<i64>) -> Element {
    rsx! {
        label {
            class: "flex items-center justify-between py-2",
            span { "{label}" }
            input {
                class: "w-24 px-2 py-1 border rounded text-right",
                r#type: "number",
                value: "{value}",
                oninput: move |evt| match evt.value().trim().parse::<i64>() {
                    Ok(minutes) => on_change.call(minutes),
                    Err(_) => log::debug!("Ignoring non-numeric duration input: {:?}", evt.value()),
                },
            }
        }
    }
}

#[component]
pub fn SettingsPage() -> Element {
    let mut store = use_settings();
    let settings = store.read().settings();

    rsx! {
        div {
            class: "container mx-auto p-4 max-w-md",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Settings"
            }
            DurationInput {
                label: "Work (minutes)",
                value: settings.work_duration,
                on_change: move |m: i64| store.write().update_settings(TimerSettingsPatch::work(m)),
            }
            DurationInput {
                label: "Short break (minutes)",
                value: settings.short_break_duration,
                on_change: move |m: i64| store.write().update_settings(TimerSettingsPatch::short_break(m)),
            }
            DurationInput {
                label: "Long break (minutes)",
                value: settings.long_break_duration,
                on_change: move |m: i64| store.write().update_settings(TimerSettingsPatch::long_break(m)),
            }
            button {
                class: "mt-4 py-2 px-4 bg-blue-500 text-white rounded hover:bg-blue-600 transition duration-300 ease-in-out",
                onclick: move |_| store.write().reset_settings(),
                "Reset to defaults"
            }
        }
    }
}
