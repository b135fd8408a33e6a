use crate::app::Route;
use crate::i18n::{get_dict, Language};
use dioxus::prelude::*;

#[component]
pub fn Sidebar(
    on_theme_toggle: Option<EventHandler<MouseEvent>>,
    on_lang_toggle: Option<EventHandler<MouseEvent>>,
    is_dark: bool,
) -> Element {
    let theme_icon = if is_dark { "light_mode" } else { "dark_mode" };
    let current_route = use_route::<Route>();
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());
    let lang_code = match *lang.read() {
        Language::En => "EN",
        Language::Ja => "JA",
    };

    rsx! {
        nav {
            class: "md-sidebar",
            NavItem {
                icon: "memory".to_string(),
                label: dict.flash_tool_nav.to_string(),
                to: Route::FlashTool {},
                active: current_route == Route::FlashTool {},
            }

            // Spacer
            div { style: "flex: 1;" }

            div {
                class: "md-nav-item",
                title: "Language",
                onclick: move |evt| if let Some(h) = &on_lang_toggle { h.call(evt) },
                span { class: "material-symbols-outlined icon", "language" }
                span { class: "md-nav-caption", "{lang_code}" }
            }
            div {
                class: "md-nav-item",
                onclick: move |evt| if let Some(h) = &on_theme_toggle { h.call(evt) },
                span { class: "material-symbols-outlined icon", "{theme_icon}" }
            }

            div { style: "height: 12px;" }
        }
    }
}

#[component]
fn NavItem(
    icon: String,
    label: String,
    to: Route,
    #[props(default = false)] active: bool,
) -> Element {
    let active_class = if active { "active" } else { "" };

    rsx! {
        Link {
            to: to,
            class: "md-nav-item {active_class}",
            span { class: "material-symbols-outlined icon", "{icon}" }
            "{label}"
        }
    }
}
