use dioxus::prelude::*;
use crate::theme::AppColors;

/// Label, input slot and the field's validation message.
#[component]
pub fn FormField(
    is_dark: bool,
    label: String,
    error: Option<String>,
    children: Element,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let error_color = AppColors::error(is_dark);
    rsx! {
        div { style: "flex: 1; min-width: 240px; margin-bottom: 16px;",
            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "{label}" }
            {children}
            if let Some(ref e) = error {
                p { style: "color: {error_color}; font-size: 0.8rem; margin: 4px 0 0 12px;", "{e}" }
            }
        }
    }
}
