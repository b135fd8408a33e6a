use crate::presenter::ConfirmRequest;
use dioxus::prelude::*;

/// Modal yes/no prompt. Escape, the close button and a click on the backdrop
/// all answer `false`.
#[component]
pub fn ConfirmDialog(request: Option<ConfirmRequest>, on_answer: EventHandler<bool>) -> Element {
    let Some(request) = request else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onclick: move |_| on_answer.call(false),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_answer.call(false);
                }
            },
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    span { class: "material-symbols-outlined modal-icon", "warning" }
                    h2 { class: "modal-title", "{request.title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_answer.call(false),
                        span { class: "material-symbols-outlined", "close" }
                    }
                }
                p { class: "modal-message", "{request.message}" }
                div { class: "modal-actions",
                    button {
                        class: "md-button btn-text",
                        onclick: move |_| on_answer.call(false),
                        "{request.cancel_label}"
                    }
                    button {
                        class: "md-button btn-danger",
                        autofocus: true,
                        onclick: move |_| on_answer.call(true),
                        "{request.confirm_label}"
                    }
                }
            }
        }
    }
}
