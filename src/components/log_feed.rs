use crate::components::Button;
use crate::presenter::LogEntry;
use dioxus::prelude::*;

#[component]
pub fn LogFeed(
    entries: Vec<LogEntry>,
    placeholder: String,
    clear_label: String,
    on_clear: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "log-feed",
            div { class: "log-container",
                if entries.is_empty() {
                    span { class: "log-placeholder", "{placeholder}" }
                }
                for (i, entry) in entries.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "log-entry {entry.severity.class()}",
                        span { class: "timestamp", "[{entry.timestamp}]" }
                        span { class: "message", "{entry.message}" }
                    }
                }
            }
            div { class: "md-card-actions",
                Button {
                    variant: "text".to_string(),
                    icon: "delete_sweep".to_string(),
                    onclick: move |evt| on_clear.call(evt),
                    "{clear_label}"
                }
            }
        }
    }
}
