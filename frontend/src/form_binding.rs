//! Glue between widget callbacks and [`EventForm`] that must hold outside the renderer.

use evently_client_core::{EventForm, StagedFile};

pub const BUSY_MESSAGE: &str = "Дождитесь окончания сохранения";

/// Stages a picked image unless a submission is in flight. A submit works on its own copy
/// of the form and writes it back when done, so staging now would be lost.
pub fn stage_picked_file(form: &mut EventForm, file: StagedFile, submitting: bool) -> Result<(), &'static str> {
    if submitting {
        tracing::debug!(name = %file.name, "image picked during submit, ignored");
        return Err(BUSY_MESSAGE);
    }
    form.stage_file(file);
    Ok(())
}

/// The uploader's clear button: drops a staged file, or else removes the saved image.
pub fn clear_image(form: &mut EventForm) {
    if form.staged_file().is_some() {
        form.clear_staged_file();
    } else {
        form.edit(|d| d.image_url.clear());
    }
}
