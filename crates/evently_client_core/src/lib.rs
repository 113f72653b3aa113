//! Evently client core: the event create/update form workflow and its collaborators
//! (schema validation, image upload, events API, navigation).

use std::sync::Arc;

mod actions;
mod api;
mod config;
mod error;
mod form;
mod ids;
mod models;
mod navigation;
mod staging;
mod upload;
mod validation;

pub use actions::{CreateEventParams, EventActions, HttpEventActions, UpdateEventParams};
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ActionError, FormError, StageError, SubmitError, UploadError};
pub use form::{
    Collaborators, EventForm, FormMode, FormOptions, FormPhase, FormProps, PriceInput,
    SubmitOutcome,
};
pub use ids::{CategoryId, EventId, UserId};
pub use models::{Category, EventDraft, EventRecord, EventUpdate, UploadedFile};
pub use navigation::{
    event_path, update_event_path, NavRequest, Navigator, PendingNavigation, CREATE_EVENT_PATH,
    HEADER_LINKS, HOME_PATH, PROFILE_PATH,
};
pub use staging::{is_preview_url, StagedFile};
pub use upload::{HttpUploadService, UploadService};
pub use validation::{parse_price, DraftValidator, EventSchema, Field, FieldErrors};

/// HTTP-backed collaborators sharing one client. The events API handle is returned too so
/// callers can load dropdown categories.
pub fn http_collaborators(
    config: ClientConfig,
    navigator: Arc<dyn Navigator>,
) -> Result<(Collaborators, Arc<HttpEventActions>), ActionError> {
    let api = ApiClient::new(config)?;
    tracing::info!(api_url = %api.config().api_url, upload_url = %api.config().upload_url, "http collaborators ready");
    let actions = Arc::new(HttpEventActions::new(api.clone()));
    let uploader = Arc::new(HttpUploadService::new(api));
    Ok((
        Collaborators::new(uploader, actions.clone(), navigator),
        actions,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_collaborators_build_from_default_config() {
        let nav = Arc::new(PendingNavigation::new());
        let (services, actions) = http_collaborators(ClientConfig::default(), nav).expect("build");
        assert!(services.validator.is_none());
        assert_eq!(Arc::strong_count(&actions), 2);
    }
}
