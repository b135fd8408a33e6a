#![allow(non_snake_case)]

use crate::components::Layout;
use crate::i18n::{get_dict, Language};
use crate::pages::flash_tool::FlashTool;
use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

static CSS: Asset = asset!("/assets/styles.css");
static MATERIAL_CSS: Asset = asset!("/assets/material.css");

// Helper to switch theme
#[wasm_bindgen(
    inline_js = "export function set_theme(theme) { document.documentElement.setAttribute('data-theme', theme); }"
)]
extern "C" {
    fn set_theme(theme: &str);
}

#[derive(Clone, Copy, PartialEq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    FlashTool {},
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        div { "Page not found: {route:?}" }
    }
}

pub fn App() -> Element {
    rsx! {
        link { rel: "stylesheet", href: CSS }
        link { rel: "stylesheet", href: MATERIAL_CSS }
        Router::<Route> {}
    }
}

#[component]
fn AppLayout() -> Element {
    let mut theme = use_signal(|| Theme::Light);
    let mut lang = use_context_provider(|| Signal::new(Language::Ja));
    let dict = get_dict(*lang.read());

    // Apply initial theme
    use_effect(move || {
        set_theme(theme.peek().as_str());
    });

    let toggle_theme = move |_| {
        let new_theme = match *theme.read() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        theme.set(new_theme);
        set_theme(new_theme.as_str());
    };

    let toggle_lang = move |_| {
        let new_lang = match *lang.read() {
            Language::En => Language::Ja,
            Language::Ja => Language::En,
        };
        lang.set(new_lang);
    };

    rsx! {
        Layout {
            title: dict.app_title.to_string(),
            subtitle: dict.app_subtitle.to_string(),
            on_theme_toggle: toggle_theme,
            on_lang_toggle: toggle_lang,
            is_dark: *theme.read() == Theme::Dark,
            Outlet::<Route> {}
        }
    }
}
