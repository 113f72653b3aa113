use dioxus::prelude::*;
use evently_client_core::{event_path, EventRecord, CREATE_EVENT_PATH};
use crate::datetime_input::display_record_date;
use crate::theme::AppColors;
use crate::widgets::{FormCard, PageBackground};

#[component]
pub fn HomeScreen(is_dark: bool, records: Vec<EventRecord>, on_navigate: EventHandler<String>) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);

    rsx! {
        PageBackground { is_dark,
            div { style: "padding: 24px; max-width: 880px; margin: 0 auto;",
                h1 { style: "color: {on_surface}; margin-bottom: 8px;", "Мероприятия" }
                button {
                    onclick: move |_| on_navigate.call(CREATE_EVENT_PATH.to_string()),
                    style: "padding: 10px 24px; border-radius: 999px; background: {primary}; color: white; border: none; cursor: pointer; margin-bottom: 16px;",
                    "Создать мероприятие"
                }
                if records.is_empty() {
                    p { style: "color: {muted};", "Пока нет мероприятий." }
                }
                for record in records {
                    EventRow { key: "{record.id}", is_dark, record, on_navigate }
                }
            }
        }
    }
}

/// One clickable summary line; also used by the profile screen.
#[component]
pub fn EventRow(is_dark: bool, record: EventRecord, on_navigate: EventHandler<String>) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let path = event_path(&record.id);
    let when = display_record_date(&record.start_date_time);
    rsx! {
        FormCard { is_dark,
            div {
                onclick: move |_| on_navigate.call(path.clone()),
                style: "cursor: pointer;",
                div { style: "font-weight: 600; color: {on_surface};", "{record.title}" }
                div { style: "font-size: 0.85rem; color: {muted};", "{when} · {record.location}" }
            }
        }
    }
}
