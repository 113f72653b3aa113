//! Drop-zone staging: hold one image in memory until submit uploads it.

use crate::error::StageError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// File dropped on the form, not yet uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl StagedFile {
    /// Accepts `image/*` only. A missing content type is guessed from the extension.
    pub fn new(
        name: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, StageError> {
        let name = name.into();
        let content_type = content_type
            .filter(|c| !c.trim().is_empty())
            .or_else(|| guess_image_type(&name).map(str::to_string))
            .unwrap_or_else(|| "application/octet-stream".to_string());
        if !content_type.to_ascii_lowercase().starts_with("image/") {
            return Err(StageError::NotAnImage(content_type));
        }
        if bytes.is_empty() {
            return Err(StageError::Empty(name));
        }
        Ok(Self {
            name,
            content_type,
            bytes,
        })
    }

    /// Local preview for the drop zone (`data:` URL). Never sent as the final image URL.
    pub fn preview_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Bytes omitted.
impl std::fmt::Debug for StagedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagedFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// True for the local previews produced by [`StagedFile::preview_url`].
pub fn is_preview_url(url: &str) -> bool {
    url.starts_with("data:")
}

fn guess_image_type(name: &str) -> Option<&'static str> {
    let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
