use dioxus::prelude::*;
use evently_client_core::Category;
use crate::theme::field_style;

/// Category select. An empty `value` shows the placeholder option.
#[component]
pub fn CategoryDropdown(
    is_dark: bool,
    value: String,
    categories: Vec<Category>,
    disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    let style = field_style(is_dark);
    rsx! {
        select {
            value: "{value}",
            disabled,
            onchange: move |ev| on_change.call(ev.value()),
            style: "{style}",
            option { value: "", disabled: true, selected: value.is_empty(), "Категория" }
            for category in categories {
                option {
                    key: "{category.id}",
                    value: "{category.id}",
                    selected: category.id.as_str() == value,
                    "{category.name}"
                }
            }
        }
    }
}
