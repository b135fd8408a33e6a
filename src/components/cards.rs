use dioxus::prelude::*;

/// Titled surface. `icon` is a Material Symbols name shown before the title.
#[component]
pub fn Card(
    #[props(default = "".to_string())] title: String,
    #[props(default = "".to_string())] subtitle: String,
    #[props(default = "".to_string())] icon: String,
    #[props(default = false)] danger: bool,
    children: Element,
    actions: Option<Element>,
) -> Element {
    let tone = if danger { "md-card danger" } else { "md-card" };

    rsx! {
        section {
            class: "{tone}",
            if !title.is_empty() {
                div {
                   class: "md-card-header",
                   if !icon.is_empty() {
                       span { class: "material-symbols-outlined md-card-icon", "{icon}" }
                   }
                   div {
                       div { class: "md-card-title", "{title}" }
                       if !subtitle.is_empty() {
                           div { class: "md-card-subtitle", "{subtitle}" }
                       }
                   }
                }
            }
            div {
                class: "md-card-content",
                {children}
            }
            if let Some(actions) = actions {
                div {
                    class: "md-card-actions",
                    {actions}
                }
            }
        }
    }
}
