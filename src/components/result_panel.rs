use crate::presenter::{ResultView, Severity};
use dioxus::prelude::*;

#[component]
pub fn ResultPanel(view: Option<ResultView>) -> Element {
    let Some(view) = view else {
        return rsx! {};
    };
    let severity = view.severity.class();
    let icon = match view.severity {
        Severity::Success => "check_circle",
        Severity::Warning => "warning",
        Severity::Error => "report",
        Severity::Info => "info",
    };

    rsx! {
        div { class: "result-container {severity}",
            span { class: "material-symbols-outlined", style: "font-size: 18px;", "{icon}" }
            div { class: "result-body",
                strong { "{view.title}" }
                if let Some(detail) = &view.detail {
                    span { class: "result-detail", "{detail}" }
                }
                if let Some(link) = &view.download {
                    a {
                        class: "md-button btn-filled",
                        href: "{link.url}",
                        download: "{link.file_name}",
                        span { class: "material-symbols-outlined icon", "download" }
                        span { class: "label", "{link.label}" }
                    }
                }
            }
        }
    }
}
