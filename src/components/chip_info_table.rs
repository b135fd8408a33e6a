use crate::presenter::ChipInfoView;
use dioxus::prelude::*;

#[component]
pub fn ChipInfoTable(
    view: ChipInfoView,
    show_label: String,
    hide_label: String,
    empty_label: String,
) -> Element {
    let mut raw_visible = use_signal(|| false);

    rsx! {
        table { class: "chip-info-table",
            for row in view.rows.iter() {
                tr {
                    key: "{row.label}",
                    td { strong { "{row.label}" } }
                    td { class: "{row.class()}", "{row.value}" }
                }
            }
        }
        div { class: "chip-info-item raw-output-container",
            button {
                class: "md-button btn-text",
                onclick: move |_| {
                    let visible = *raw_visible.read();
                    raw_visible.set(!visible);
                },
                if *raw_visible.read() { "{hide_label}" } else { "{show_label}" }
            }
            if *raw_visible.read() {
                pre { class: "raw-output-pre",
                    {view.raw_output.clone().unwrap_or(empty_label.clone())}
                }
            }
        }
    }
}
