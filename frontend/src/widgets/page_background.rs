use dioxus::prelude::*;
use crate::theme::AppColors;

#[component]
pub fn PageBackground(is_dark: bool, children: Element) -> Element {
    let surface = AppColors::surface(is_dark);
    let tint = if is_dark { "#221F33" } else { "#EDEBFF" };
    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(to bottom, {tint}, {surface} 320px);",
            {children}
        }
    }
}
