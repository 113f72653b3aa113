use dioxus::prelude::*;
use crate::theme::spacing;

#[component]
pub fn FormCard(is_dark: bool, children: Element) -> Element {
    let surface = if is_dark { "rgba(44,41,58,0.92)" } else { "rgba(255,255,255,0.97)" };
    rsx! {
        div {
            style: "background: {surface}; border-radius: 16px; padding: {spacing::CARD_PADDING}; margin: {spacing::SM} 0; box-shadow: 0 1px 3px rgba(0,0,0,0.08);",
            {children}
        }
    }
}
