use crate::components::Button;
use crate::presenter::PortOption;
use dioxus::prelude::*;

#[component]
pub fn PortSelect(
    ports: Vec<PortOption>,
    selected: String,
    label: String,
    placeholder: String,
    refresh_label: String,
    #[props(default = false)] refreshing: bool,
    on_select: EventHandler<String>,
    on_refresh: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { r#for: "port-select", class: "form-label", "{label}" }
            div { style: "display: flex; gap: 8px;",
                select {
                    class: "md-select",
                    id: "port-select",
                    style: "flex: 1;",
                    value: "{selected}",
                    onchange: move |evt| on_select.call(evt.value()),
                    option { value: "", selected: selected.is_empty(), "{placeholder}" }
                    for port in ports.iter() {
                        option {
                            key: "{port.value}",
                            value: "{port.value}",
                            selected: port.value == selected,
                            "{port.label}"
                        }
                    }
                }
                Button {
                    variant: "tonal".to_string(),
                    icon: "refresh".to_string(),
                    disabled: refreshing,
                    onclick: move |evt| on_refresh.call(evt),
                    "{refresh_label}"
                }
            }
        }
    }
}
