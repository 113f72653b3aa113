//! Event submission workflow: seed, edit, stage an image, validate, upload, create/update,
//! then reset and navigate. Every failure leaves the form editable and is returned to the caller.

use crate::actions::{CreateEventParams, EventActions, UpdateEventParams};
use crate::error::{FormError, SubmitError, UploadError};
use crate::ids::{EventId, UserId};
use crate::models::{EventDraft, EventRecord, EventUpdate};
use crate::navigation::{event_path, Navigator, PROFILE_PATH};
use crate::staging::{is_preview_url, StagedFile};
use crate::upload::UploadService;
use crate::validation::{DraftValidator, EventSchema, Field, FieldErrors};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    /// Submit button label.
    pub fn label(&self) -> &'static str {
        match self {
            FormMode::Create => "Создать",
            FormMode::Update => "Обновить",
        }
    }

    pub fn submitting_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Создание…",
            FormMode::Update => "Обновление…",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceInput {
    /// Any non-empty text.
    #[default]
    Text,
    /// Non-negative decimal.
    Numeric,
}

/// Field-set switches that replace the old forked create/update forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormOptions {
    pub capacity: bool,
    pub price_input: PriceInput,
}

impl FormOptions {
    /// Capacity field, free-text price.
    pub fn with_capacity() -> Self {
        Self {
            capacity: true,
            price_input: PriceInput::Text,
        }
    }

    /// No capacity field, numeric price.
    pub fn numeric_price() -> Self {
        Self {
            capacity: false,
            price_input: PriceInput::Numeric,
        }
    }
}

/// Construction-time configuration.
#[derive(Clone, Debug)]
pub struct FormProps {
    pub mode: FormMode,
    pub owner_id: UserId,
    pub existing: Option<EventRecord>,
    pub existing_id: Option<EventId>,
    pub options: FormOptions,
}

impl FormProps {
    pub fn create(owner_id: UserId) -> Self {
        Self {
            mode: FormMode::Create,
            owner_id,
            existing: None,
            existing_id: None,
            options: FormOptions::with_capacity(),
        }
    }

    pub fn update(owner_id: UserId, existing: Option<EventRecord>, existing_id: Option<EventId>) -> Self {
        Self {
            mode: FormMode::Update,
            owner_id,
            existing,
            existing_id,
            options: FormOptions::numeric_price(),
        }
    }
}

/// External collaborators, passed explicitly. Without a validator the form uses
/// [`EventSchema`] configured from its [`FormOptions`].
#[derive(Clone)]
pub struct Collaborators {
    pub validator: Option<Arc<dyn DraftValidator>>,
    pub uploader: Arc<dyn UploadService>,
    pub actions: Arc<dyn EventActions>,
    pub navigator: Arc<dyn Navigator>,
}

impl Collaborators {
    pub fn new(
        uploader: Arc<dyn UploadService>,
        actions: Arc<dyn EventActions>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            validator: None,
            uploader,
            actions,
            navigator,
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn DraftValidator>) -> Self {
        self.validator = Some(validator);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editable,
    Submitting,
    Navigated,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Persisted; the navigator was sent to `path` (the record's detail page).
    Saved { record: EventRecord, path: String },
    /// Update without an event id: navigated back, nothing was sent.
    WentBack,
}

#[derive(Clone)]
pub struct EventForm {
    mode: FormMode,
    owner_id: UserId,
    existing_id: Option<EventId>,
    options: FormOptions,
    initial: EventDraft,
    draft: EventDraft,
    errors: FieldErrors,
    staged: Option<StagedFile>,
    image_before_staging: Option<String>,
    phase: FormPhase,
    validator: Arc<dyn DraftValidator>,
    services: Collaborators,
}

impl EventForm {
    /// Seeds from `existing` in update mode, otherwise from the empty defaults.
    pub fn initialize(props: FormProps, services: Collaborators) -> Result<Self, FormError> {
        let initial = match (props.mode, &props.existing) {
            (FormMode::Update, Some(record)) => EventDraft::from_record(record)?,
            _ => EventDraft::default(),
        };
        let validator = services
            .validator
            .clone()
            .unwrap_or_else(|| Arc::new(EventSchema::new(props.options)) as Arc<dyn DraftValidator>);
        Ok(Self {
            mode: props.mode,
            owner_id: props.owner_id,
            existing_id: props.existing_id,
            options: props.options,
            draft: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            staged: None,
            image_before_staging: None,
            phase: FormPhase::Editable,
            validator,
            services,
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn staged_file(&self) -> Option<&StagedFile> {
        self.staged.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial || self.staged.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Submitting => self.mode.submitting_label(),
            _ => self.mode.label(),
        }
    }

    /// Applies a field change and clears the errors of the fields it touched.
    pub fn edit(&mut self, f: impl FnOnce(&mut EventDraft)) {
        let before = self.draft.clone();
        f(&mut self.draft);
        for field in changed_fields(&before, &self.draft) {
            self.errors.remove(field);
            // ordering error lives on the end date
            if field == Field::StartDateTime {
                self.errors.remove(Field::EndDateTime);
            }
        }
    }

    /// Replaces the staged image and shows its local preview in `image_url`.
    pub fn stage_file(&mut self, file: StagedFile) {
        if self.staged.is_none() {
            self.image_before_staging = Some(self.draft.image_url.clone());
        }
        tracing::debug!(name = %file.name, bytes = file.len(), "image staged");
        self.draft.image_url = file.preview_url();
        self.errors.remove(Field::ImageUrl);
        self.staged = Some(file);
    }

    /// Drops the staged image and restores the previous image URL.
    pub fn clear_staged_file(&mut self) {
        if self.staged.take().is_some() {
            if let Some(previous) = self.image_before_staging.take() {
                self.draft.image_url = previous;
            }
        }
    }

    /// Runs the validator and stores its field errors.
    pub fn validate(&mut self) -> bool {
        self.errors = self.validator.validate(&self.draft);
        self.errors.is_valid()
    }

    /// Back to the values the form was initialized with.
    pub fn reset(&mut self) {
        self.draft = self.initial.clone();
        self.errors.clear();
        self.staged = None;
        self.image_before_staging = None;
        self.phase = FormPhase::Editable;
    }

    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.phase = FormPhase::Submitting;
        tracing::info!(mode = ?self.mode, staged = self.staged.is_some(), "submitting event form");
        let result = self.run_submit().await;
        self.phase = match result {
            Ok(_) => FormPhase::Navigated,
            Err(_) => FormPhase::Editable,
        };
        result
    }

    async fn run_submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        // Nothing to update: leave even when the draft is invalid.
        let update_id = match (self.mode, &self.existing_id) {
            (FormMode::Create, _) => None,
            (FormMode::Update, Some(id)) => Some(id.clone()),
            (FormMode::Update, None) => {
                tracing::warn!("update submitted without an event id, navigating back");
                self.services.navigator.go_back();
                return Ok(SubmitOutcome::WentBack);
            }
        };

        if !self.validate() {
            tracing::warn!(
                mode = ?self.mode,
                field_count = self.errors.len(),
                "event form rejected by validation"
            );
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let mut payload = self.draft.clone();
        match &self.staged {
            Some(file) => payload.image_url = self.upload_staged(file.clone()).await?,
            // a local preview is never persisted
            None if is_preview_url(&payload.image_url) => payload.image_url.clear(),
            None => {}
        }

        let result = match &update_id {
            None => {
                self.services
                    .actions
                    .create(CreateEventParams {
                        event: payload,
                        user_id: self.owner_id.clone(),
                        path: PROFILE_PATH.to_string(),
                    })
                    .await
            }
            Some(id) => {
                self.services
                    .actions
                    .update(UpdateEventParams {
                        user_id: self.owner_id.clone(),
                        event: EventUpdate {
                            id: id.clone(),
                            draft: payload,
                        },
                        path: event_path(id),
                    })
                    .await
            }
        };

        match result {
            Ok(Some(record)) => {
                let path = event_path(&record.id);
                tracing::info!(mode = ?self.mode, event_id = %record.id, "event saved");
                self.reset();
                self.services.navigator.go_to(&path);
                Ok(SubmitOutcome::Saved { record, path })
            }
            Ok(None) => {
                tracing::error!(mode = ?self.mode, event_id = ?update_id, "remote operation returned no event");
                Err(SubmitError::NotPersisted { mode: self.mode })
            }
            Err(e) => {
                tracing::error!(mode = ?self.mode, event_id = ?update_id, error = %e, "error creating or updating event");
                Err(SubmitError::Action(e))
            }
        }
    }

    /// Only the first returned URL is kept.
    async fn upload_staged(&self, file: StagedFile) -> Result<String, UploadError> {
        let uploaded = self
            .services
            .uploader
            .upload(vec![file])
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "image upload failed");
                e
            })?;
        match uploaded.into_iter().next() {
            Some(first) if !first.url.trim().is_empty() => Ok(first.url),
            _ => {
                tracing::error!("image upload returned no URL");
                Err(UploadError::Empty)
            }
        }
    }
}

fn changed_fields(a: &EventDraft, b: &EventDraft) -> Vec<Field> {
    let mut out = Vec::new();
    let mut check = |changed: bool, field: Field| {
        if changed {
            out.push(field);
        }
    };
    check(a.title != b.title, Field::Title);
    check(a.category_id != b.category_id, Field::CategoryId);
    check(a.description != b.description, Field::Description);
    check(a.image_url != b.image_url, Field::ImageUrl);
    check(a.location != b.location, Field::Location);
    check(a.start_date_time != b.start_date_time, Field::StartDateTime);
    check(a.end_date_time != b.end_date_time, Field::EndDateTime);
    check(a.price != b.price, Field::Price);
    check(a.is_free != b.is_free, Field::IsFree);
    check(a.capacity != b.capacity, Field::Capacity);
    check(a.url != b.url, Field::Url);
    out
}
