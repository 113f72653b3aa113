//! Data models for the event form: draft (form values), persisted record, categories, uploads.
//! Wire format is camelCase JSON with RFC 3339 dates; the draft keeps chrono types internally.

use crate::error::FormError;
use crate::ids::{CategoryId, EventId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// In-progress event values bound to the form fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[validate(length(min = 3, message = "Title must be at least 3 characters."))]
    pub title: String,
    #[validate(length(
        min = 3,
        max = 400,
        message = "Description must be between 3 and 400 characters."
    ))]
    pub description: String,
    #[validate(length(
        min = 3,
        max = 400,
        message = "Location must be between 3 and 400 characters."
    ))]
    pub location: String,
    pub image_url: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub category_id: String,
    pub price: String,
    pub is_free: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub capacity: String,
    #[serde(default)]
    pub url: String,
}

impl EventDraft {
    /// Blank draft with both dates set to `now`.
    pub fn empty_at(now: DateTime<Utc>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            image_url: String::new(),
            start_date_time: now,
            end_date_time: now,
            category_id: String::new(),
            price: String::new(),
            is_free: false,
            capacity: String::new(),
            url: String::new(),
        }
    }

    /// Seed a draft from a stored record, parsing its RFC 3339 dates.
    pub fn from_record(record: &EventRecord) -> Result<Self, FormError> {
        Ok(Self {
            title: record.title.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            image_url: record.image_url.clone(),
            start_date_time: parse_record_date("startDateTime", &record.start_date_time)?,
            end_date_time: parse_record_date("endDateTime", &record.end_date_time)?,
            category_id: record.category_id.clone(),
            price: record.price.clone(),
            is_free: record.is_free,
            capacity: record.capacity.clone(),
            url: record.url.clone(),
        })
    }
}

impl Default for EventDraft {
    fn default() -> Self {
        Self::empty_at(Utc::now())
    }
}

fn parse_record_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, FormError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FormError::InvalidRecordDate {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Event as stored by the backend (wire format: strings for dates).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(rename = "_id")]
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image_url: String,
    pub start_date_time: String,
    pub end_date_time: String,
    #[serde(default)]
    pub category_id: String,
    /// Category name when the backend joins it in.
    #[serde(default, deserialize_with = "category_name")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default, deserialize_with = "string_or_number")]
    pub capacity: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub organizer: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Backends disagree on whether price/capacity are numbers or strings; accept both.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    match v {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// `"category": "Music"` or a populated `{ "_id": ..., "name": "Music" }`.
fn category_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Object(map)) => map
            .get("name")
            .and_then(|n| n.as_str())
            .map(str::to_string),
        _ => None,
    }
    .filter(|name| !name.trim().is_empty()))
}

/// Draft plus identity, as sent to the update operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventUpdate {
    #[serde(rename = "_id")]
    pub id: EventId,
    #[serde(flatten)]
    pub draft: EventDraft,
}

/// Dropdown option.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
}

/// One uploaded file as reported by the upload provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}
