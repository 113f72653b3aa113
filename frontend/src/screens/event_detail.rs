use dioxus::prelude::*;
use evently_client_core::{update_event_path, Category, EventId, EventRecord};
use crate::datetime_input::display_record_date;
use crate::theme::AppColors;
use crate::widgets::{FormCard, PageBackground};

#[component]
pub fn EventDetailScreen(
    is_dark: bool,
    event_id: EventId,
    record: Option<EventRecord>,
    categories: Vec<Category>,
    on_navigate: EventHandler<String>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);
    let success = AppColors::success(is_dark);
    let edit_path = update_event_path(&event_id);

    let Some(record) = record else {
        return rsx! {
            PageBackground { is_dark,
                div { style: "padding: 24px; max-width: 880px; margin: 0 auto;",
                    FormCard { is_dark,
                        p { style: "color: {muted};", "Мероприятие {event_id} ещё не загружено." }
                        button {
                            onclick: move |_| on_navigate.call(edit_path.clone()),
                            style: "background: none; border: none; color: {primary}; cursor: pointer;",
                            "Редактировать"
                        }
                    }
                }
            }
        };
    };

    let category = record
        .category
        .clone()
        .or_else(|| {
            categories
                .iter()
                .find(|c| c.id.as_str() == record.category_id)
                .map(|c| c.name.clone())
        })
        .unwrap_or_else(|| record.category_id.clone());
    let price = if record.is_free {
        "Бесплатно".to_string()
    } else {
        format!("{} ₽", record.price)
    };
    let start = display_record_date(&record.start_date_time);
    let end = display_record_date(&record.end_date_time);

    rsx! {
        PageBackground { is_dark,
            div { style: "padding: 24px; max-width: 880px; margin: 0 auto;",
                FormCard { is_dark,
                    if !record.image_url.is_empty() {
                        img { src: "{record.image_url}", alt: "{record.title}", style: "width: 100%; max-height: 420px; object-fit: cover; border-radius: 12px;" }
                    }
                    h1 { style: "color: {on_surface}; margin: 16px 0 8px;", "{record.title}" }
                    div { style: "display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 16px;",
                        span { style: "padding: 4px 12px; border-radius: 999px; background: rgba(21,128,61,0.12); color: {success}; font-weight: 600;", "{price}" }
                        span { style: "padding: 4px 12px; border-radius: 999px; background: rgba(0,0,0,0.05); color: {muted};", "{category}" }
                        if !record.capacity.is_empty() {
                            span { style: "color: {muted};", "Мест: {record.capacity}" }
                        }
                    }
                    p { style: "color: {on_surface};", "🗓 {start} – {end}" }
                    p { style: "color: {on_surface};", "📍 {record.location}" }
                    p { style: "color: {on_surface}; white-space: pre-wrap; margin-top: 16px;", "{record.description}" }
                    if !record.url.is_empty() {
                        a { href: "{record.url}", style: "color: {primary};", "{record.url}" }
                    }
                    div { style: "margin-top: 24px;",
                        button {
                            onclick: move |_| on_navigate.call(edit_path.clone()),
                            style: "padding: 10px 24px; border-radius: 999px; background: {primary}; color: white; border: none; cursor: pointer;",
                            "Редактировать"
                        }
                    }
                }
            }
        }
    }
}
