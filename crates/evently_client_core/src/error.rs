use crate::form::FormMode;
use crate::validation::FieldErrors;
use thiserror::Error;

/// Form could not be initialized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("record field {field} has an invalid date {value:?}: {reason}")]
    InvalidRecordDate {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// File rejected by the drop zone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StageError {
    #[error("only images can be attached (got {0})")]
    NotAnImage(String),
    #[error("file {0} is empty")]
    Empty(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Request(String),
    #[error("upload rejected: {status} {body}")]
    Status { status: u16, body: String },
    #[error("upload response could not be read: {0}")]
    Decode(String),
    #[error("upload returned no files")]
    Empty,
}

/// Failure of a create/update remote operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("401 Unauthorized {0}")]
    Unauthorized(String),
    #[error("{status} {body}")]
    Status { status: u16, body: String },
    #[error("response could not be read: {0}")]
    Decode(String),
}

impl ActionError {
    pub fn is_network(&self) -> bool {
        matches!(self, ActionError::Request(_))
    }
}

/// Why a submission did not reach the detail page. The form stays editable in every case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
    #[error("image upload failed: {0}")]
    Upload(#[from] UploadError),
    #[error("{mode:?} returned no event")]
    NotPersisted { mode: FormMode },
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl SubmitError {
    /// Message suitable for a banner above the submit button.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(_) => "Проверьте поля формы".to_string(),
            SubmitError::Upload(_) => "Не удалось загрузить изображение".to_string(),
            SubmitError::NotPersisted { .. } => "Мероприятие не было сохранено".to_string(),
            SubmitError::Action(ActionError::Unauthorized(_)) => {
                "Сессия истекла, войдите снова".to_string()
            }
            SubmitError::Action(e) if e.is_network() => "Нет соединения с сервером".to_string(),
            SubmitError::Action(e) => format!("Ошибка сервера: {}", e),
        }
    }
}
