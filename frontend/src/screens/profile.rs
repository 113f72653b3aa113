use dioxus::prelude::*;
use evently_client_core::{EventRecord, UserId};
use crate::screens::home::EventRow;
use crate::theme::AppColors;
use crate::widgets::PageBackground;

/// Events organized by `owner` in this session.
#[component]
pub fn ProfileScreen(
    is_dark: bool,
    owner: UserId,
    records: Vec<EventRecord>,
    on_navigate: EventHandler<String>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let mine: Vec<EventRecord> = records
        .into_iter()
        .filter(|r| r.organizer.as_ref().map_or(true, |o| o == &owner))
        .collect();

    rsx! {
        PageBackground { is_dark,
            div { style: "padding: 24px; max-width: 880px; margin: 0 auto;",
                h1 { style: "color: {on_surface}; margin-bottom: 8px;", "Мой профиль" }
                p { style: "color: {muted}; margin-bottom: 16px;", "Организатор: {owner}" }
                if mine.is_empty() {
                    p { style: "color: {muted};", "Вы ещё не создали ни одного мероприятия." }
                }
                for record in mine {
                    EventRow { key: "{record.id}", is_dark, record, on_navigate }
                }
            }
        }
    }
}
