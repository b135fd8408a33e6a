use dioxus::prelude::*;

/// Indeterminate bar shown while a device operation is pending.
#[component]
pub fn ProgressBar(label: Option<String>) -> Element {
    let Some(label) = label else {
        return rsx! {};
    };

    rsx! {
        div { class: "progress-container",
            div { class: "progress-header",
                span { class: "progress-text", "{label}" }
            }
            div { class: "progress-track",
                div { class: "progress-fill indeterminate" }
            }
        }
    }
}
