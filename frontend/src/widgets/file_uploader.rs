use dioxus::html::FileData;
use dioxus::prelude::*;
use evently_client_core::StagedFile;
use crate::theme::AppColors;

/// Image picker with drag-and-drop. Shows `image_url` (remote or local preview) when set.
/// Picked files are read and handed to `on_file`; rejects go to `on_error`.
#[component]
pub fn FileUploader(
    is_dark: bool,
    image_url: String,
    disabled: bool,
    on_file: EventHandler<StagedFile>,
    on_clear: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let mut dragging = use_signal(|| false);
    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);
    let border = if dragging() { primary } else { "#D0D0D0" };

    rsx! {
        div {
            ondragover: move |ev| {
                ev.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: move |ev| {
                ev.prevent_default();
                dragging.set(false);
                if disabled {
                    return;
                }
                if let Some(file) = ev.files().into_iter().next() {
                    spawn(async move {
                        match read_staged(file).await {
                            Ok(staged) => on_file.call(staged),
                            Err(e) => on_error.call(e),
                        }
                    });
                }
            },
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 240px; border: 2px dashed {border}; border-radius: 16px; overflow: hidden; background: rgba(0,0,0,0.03);",
            if image_url.is_empty() {
                div { style: "text-align: center; padding: 24px; color: {muted};",
                    div { style: "font-size: 40px;", "🖼" }
                    p { "Перетащите изображение сюда" }
                    p { style: "font-size: 0.8rem;", "SVG, PNG, JPG" }
                }
            } else {
                img { src: "{image_url}", alt: "image", style: "width: 100%; max-height: 360px; object-fit: cover;" }
            }
            div { style: "display: flex; gap: 12px; padding: 12px;",
                label { style: "padding: 8px 20px; border-radius: 999px; background: {primary}; color: white; cursor: pointer;",
                    "Выбрать с компьютера"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        disabled,
                        style: "display: none;",
                        onchange: move |ev| {
                            if let Some(file) = ev.files().into_iter().next() {
                                spawn(async move {
                                    match read_staged(file).await {
                                        Ok(staged) => on_file.call(staged),
                                        Err(e) => on_error.call(e),
                                    }
                                });
                            }
                        },
                    }
                }
                if !image_url.is_empty() {
                    button {
                        r#type: "button",
                        disabled,
                        onclick: move |_| on_clear.call(()),
                        style: "padding: 8px 20px; border-radius: 999px; background: none; border: 1px solid {muted}; color: {muted}; cursor: pointer;",
                        "Убрать"
                    }
                }
            }
        }
    }
}

async fn read_staged(file: FileData) -> Result<StagedFile, String> {
    let name = file.name();
    let content_type = file.content_type();
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| format!("Не удалось прочитать {}: {}", name, e))?;
    StagedFile::new(&name, content_type, bytes.to_vec()).map_err(|e| e.to_string())
}
