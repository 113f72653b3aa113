use dioxus::prelude::*;
use evently_client_core::{
    Category, EventDraft, EventForm, EventId, EventRecord, Field, FormMode, FormProps, NavRequest,
    PriceInput, SubmitError, SubmitOutcome,
};
use crate::app::AppServices;
use crate::datetime_input::{from_input_value, to_input_value};
use crate::form_binding::{clear_image, stage_picked_file};
use crate::theme::{field_style, AppColors};
use crate::widgets::{CategoryDropdown, FileUploader, FormCard, FormField, PageBackground};

type FormSlot = Result<EventForm, String>;

fn edit(mut form: Signal<FormSlot>, f: impl FnOnce(&mut EventDraft)) {
    if let Ok(form) = &mut *form.write() {
        form.edit(f);
    }
}

fn field_error(form: &EventForm, field: Field) -> Option<String> {
    form.error(field).map(str::to_string)
}

/// Create/update form bound to an [`EventForm`]. Navigation requested by the workflow is
/// forwarded to `on_navigate` once a submission settles.
#[component]
pub fn EventFormScreen(
    is_dark: bool,
    mode: FormMode,
    event_id: Option<EventId>,
    existing: Option<EventRecord>,
    categories: Vec<Category>,
    on_saved: EventHandler<EventRecord>,
    on_navigate: EventHandler<NavRequest>,
) -> Element {
    let services = use_context::<AppServices>();
    let mut form = use_signal({
        let services = services.clone();
        move || {
            let props = match mode {
                FormMode::Create => FormProps::create(services.owner.clone()),
                FormMode::Update => FormProps::update(services.owner.clone(), existing, event_id),
            };
            EventForm::initialize(props, services.collaborators.clone()).map_err(|e| {
                tracing::error!(error = %e, "event form could not be initialized");
                e.to_string()
            })
        }
    });
    let mut submitting = use_signal(|| false);
    let mut banner = use_signal(|| Option::<String>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let error_color = AppColors::error(is_dark);
    let primary = AppColors::primary(is_dark);
    let input_style = field_style(is_dark);

    let current = match form() {
        Ok(current) => current,
        Err(e) => {
            return rsx! {
                PageBackground { is_dark,
                    div { style: "padding: 24px; max-width: 640px; margin: 0 auto;",
                        FormCard { is_dark,
                            p { style: "color: {error_color};", "Не удалось открыть мероприятие: {e}" }
                            button {
                                onclick: move |_| on_navigate.call(NavRequest::Back),
                                style: "margin-top: 12px; background: none; border: none; color: {primary}; cursor: pointer;",
                                "Назад"
                            }
                        }
                    }
                }
            };
        }
    };
    let draft = current.draft().clone();
    let options = current.options();
    let busy = submitting();
    let label = if busy { mode.submitting_label() } else { current.submit_label() };
    let price_type = match options.price_input {
        PriceInput::Numeric => "number",
        PriceInput::Text => "text",
    };

    rsx! {
        PageBackground { is_dark,
            div { style: "padding: 24px; max-width: 880px; margin: 0 auto;",
                FormCard { is_dark,
                    form {
                        onsubmit: move |ev| {
                            ev.prevent_default();
                            if submitting() {
                                return;
                            }
                            let Ok(mut working) = form() else {
                                return;
                            };
                            submitting.set(true);
                            banner.set(None);
                            let pending = services.pending.clone();
                            spawn(async move {
                                let result = working.submit().await;
                                form.set(Ok(working));
                                submitting.set(false);
                                match result {
                                    Ok(SubmitOutcome::Saved { record, .. }) => on_saved.call(record),
                                    Ok(SubmitOutcome::WentBack) => {}
                                    Err(SubmitError::Invalid(_)) => {}
                                    Err(e) => banner.set(Some(e.user_message())),
                                }
                                if let Some(request) = pending.take() {
                                    on_navigate.call(request);
                                }
                            });
                        },
                        div { style: "display: flex; flex-wrap: wrap; gap: 16px;",
                            FormField { is_dark, label: "Название", error: field_error(&current, Field::Title),
                                input {
                                    r#type: "text",
                                    placeholder: "Название мероприятия",
                                    value: "{draft.title}",
                                    disabled: busy,
                                    oninput: move |ev| edit(form, |d| d.title = ev.value()),
                                    style: "{input_style}",
                                }
                            }
                            FormField { is_dark, label: "Категория", error: field_error(&current, Field::CategoryId),
                                CategoryDropdown {
                                    is_dark,
                                    value: draft.category_id.clone(),
                                    categories: categories.clone(),
                                    disabled: busy,
                                    on_change: move |id: String| edit(form, |d| d.category_id = id),
                                }
                            }
                        }
                        div { style: "display: flex; flex-wrap: wrap; gap: 16px;",
                            FormField { is_dark, label: "Описание", error: field_error(&current, Field::Description),
                                textarea {
                                    placeholder: "Описание",
                                    value: "{draft.description}",
                                    disabled: busy,
                                    rows: "8",
                                    oninput: move |ev| edit(form, |d| d.description = ev.value()),
                                    style: "{input_style} border-radius: 16px;",
                                }
                            }
                            FormField { is_dark, label: "Изображение", error: field_error(&current, Field::ImageUrl),
                                FileUploader {
                                    is_dark,
                                    image_url: draft.image_url.clone(),
                                    disabled: busy,
                                    on_file: move |file| {
                                        let busy = submitting();
                                        if let Ok(f) = &mut *form.write() {
                                            if let Err(msg) = stage_picked_file(f, file, busy) {
                                                banner.set(Some(msg.to_string()));
                                            }
                                        }
                                    },
                                    on_clear: move |_| {
                                        if let Ok(f) = &mut *form.write() {
                                            clear_image(f);
                                        }
                                    },
                                    on_error: move |msg| banner.set(Some(msg)),
                                }
                            }
                        }
                        FormField { is_dark, label: "Место проведения", error: field_error(&current, Field::Location),
                            input {
                                r#type: "text",
                                placeholder: "Место проведения или онлайн",
                                value: "{draft.location}",
                                disabled: busy,
                                oninput: move |ev| edit(form, |d| d.location = ev.value()),
                                style: "{input_style}",
                            }
                        }
                        div { style: "display: flex; flex-wrap: wrap; gap: 16px;",
                            FormField { is_dark, label: "Дата начала", error: field_error(&current, Field::StartDateTime),
                                input {
                                    r#type: "datetime-local",
                                    value: "{to_input_value(&draft.start_date_time)}",
                                    disabled: busy,
                                    oninput: move |ev| {
                                        if let Some(dt) = from_input_value(&ev.value()) {
                                            edit(form, |d| d.start_date_time = dt);
                                        }
                                    },
                                    style: "{input_style}",
                                }
                            }
                            FormField { is_dark, label: "Дата окончания", error: field_error(&current, Field::EndDateTime),
                                input {
                                    r#type: "datetime-local",
                                    value: "{to_input_value(&draft.end_date_time)}",
                                    disabled: busy,
                                    oninput: move |ev| {
                                        if let Some(dt) = from_input_value(&ev.value()) {
                                            edit(form, |d| d.end_date_time = dt);
                                        }
                                    },
                                    style: "{input_style}",
                                }
                            }
                        }
                        div { style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-end;",
                            FormField { is_dark, label: "Цена", error: field_error(&current, Field::Price),
                                input {
                                    r#type: "{price_type}",
                                    placeholder: "Цена",
                                    value: "{draft.price}",
                                    disabled: busy || draft.is_free,
                                    oninput: move |ev| edit(form, |d| d.price = ev.value()),
                                    style: "{input_style}",
                                }
                            }
                            label { style: "display: flex; align-items: center; gap: 8px; margin-bottom: 28px; color: {on_surface};",
                                input {
                                    r#type: "checkbox",
                                    checked: draft.is_free,
                                    disabled: busy,
                                    onchange: move |ev| edit(form, |d| d.is_free = ev.checked()),
                                }
                                "Бесплатный билет"
                            }
                            if options.capacity {
                                FormField { is_dark, label: "Количество мест", error: field_error(&current, Field::Capacity),
                                    input {
                                        r#type: "number",
                                        min: "1",
                                        placeholder: "Количество мест",
                                        value: "{draft.capacity}",
                                        disabled: busy,
                                        oninput: move |ev| edit(form, |d| d.capacity = ev.value()),
                                        style: "{input_style}",
                                    }
                                }
                            }
                        }
                        if let Some(ref msg) = banner() {
                            p { style: "color: {error_color}; font-size: 0.9rem; margin-bottom: 12px;", "{msg}" }
                        }
                        div { style: "display: flex; gap: 12px;",
                            button {
                                r#type: "submit",
                                disabled: busy,
                                style: "flex: 1; padding: 14px; border-radius: 999px; background: {primary}; color: white; font-weight: 600; border: none; cursor: pointer;",
                                "{label}"
                            }
                            if current.is_dirty() {
                                button {
                                    r#type: "button",
                                    disabled: busy,
                                    onclick: move |_| {
                                        banner.set(None);
                                        if let Ok(f) = &mut *form.write() {
                                            f.reset();
                                        }
                                    },
                                    style: "padding: 14px 24px; border-radius: 999px; background: none; border: 1px solid {primary}; color: {primary}; cursor: pointer;",
                                    "Сбросить"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
