use dioxus::prelude::*;
use evently_client_core::HEADER_LINKS;
use crate::theme::AppColors;

#[component]
pub fn Header(is_dark: bool, current_path: String, on_navigate: EventHandler<String>) -> Element {
    let primary = AppColors::primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    rsx! {
        nav { style: "display: flex; align-items: center; gap: 24px; padding: 16px 24px; border-bottom: 1px solid rgba(0,0,0,0.08);",
            span { style: "font-weight: 700; font-size: 1.25rem; color: {primary}; margin-right: auto;", "Evently" }
            for (label, path) in HEADER_LINKS {
                button {
                    key: "{path}",
                    onclick: move |_| on_navigate.call(path.to_string()),
                    style: "{link_style(current_path == path, primary, on_surface)}",
                    "{label}"
                }
            }
        }
    }
}

fn link_style(active: bool, primary: &str, on_surface: &str) -> String {
    if active {
        format!("background: none; border: none; cursor: pointer; font-weight: 600; color: {};", primary)
    } else {
        format!("background: none; border: none; cursor: pointer; color: {};", on_surface)
    }
}
