//! Event schema: per-field length rules (derived with `validator`) plus the cross-field
//! rules the derive cannot express (price vs. free flag, capacity, link, date order).

use crate::form::{FormOptions, PriceInput};
use crate::models::EventDraft;
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidateUrl};

/// Form fields that can carry an error message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    CategoryId,
    Description,
    ImageUrl,
    Location,
    StartDateTime,
    EndDateTime,
    Price,
    IsFree,
    Capacity,
    Url,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Title,
        Field::CategoryId,
        Field::Description,
        Field::ImageUrl,
        Field::Location,
        Field::StartDateTime,
        Field::EndDateTime,
        Field::Price,
        Field::IsFree,
        Field::Capacity,
        Field::Url,
    ];

    /// Wire (camelCase) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::CategoryId => "categoryId",
            Field::Description => "description",
            Field::ImageUrl => "imageUrl",
            Field::Location => "location",
            Field::StartDateTime => "startDateTime",
            Field::EndDateTime => "endDateTime",
            Field::Price => "price",
            Field::IsFree => "isFree",
            Field::Capacity => "capacity",
            Field::Url => "url",
        }
    }

    /// Accepts both the wire name and the Rust field name.
    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == name || f.rust_name() == name)
    }

    fn rust_name(&self) -> &'static str {
        match self {
            Field::CategoryId => "category_id",
            Field::ImageUrl => "image_url",
            Field::StartDateTime => "start_date_time",
            Field::EndDateTime => "end_date_time",
            Field::IsFree => "is_free",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message per field; the first rule that fails for a field wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` unless the field already has one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Schema collaborator: decides whether a draft may be submitted.
pub trait DraftValidator {
    fn validate(&self, draft: &EventDraft) -> FieldErrors;
}

/// Default event schema.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventSchema {
    pub options: FormOptions,
}

impl EventSchema {
    pub fn new(options: FormOptions) -> Self {
        Self { options }
    }
}

impl DraftValidator for EventSchema {
    fn validate(&self, draft: &EventDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();

        require(&mut errors, Field::Title, &draft.title, "Title is required.");
        require(&mut errors, Field::CategoryId, &draft.category_id, "Category is required.");
        require(&mut errors, Field::Description, &draft.description, "Description is required.");
        require(&mut errors, Field::Location, &draft.location, "Location is required.");

        if let Err(report) = draft.validate() {
            for (name, errs) in report.field_errors() {
                let Some(field) = Field::from_name(&name) else {
                    continue;
                };
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid.", field));
                errors.insert(field, message);
            }
        }

        if !draft.is_free {
            let price = draft.price.trim();
            if price.is_empty() {
                errors.insert(Field::Price, "Price is required unless the event is free.");
            } else if self.options.price_input == PriceInput::Numeric && parse_price(price).is_none() {
                errors.insert(Field::Price, "Price must be a non-negative number.");
            }
        }

        if self.options.capacity {
            let capacity = draft.capacity.trim();
            if !capacity.is_empty() && !matches!(capacity.parse::<u32>(), Ok(n) if n > 0) {
                errors.insert(Field::Capacity, "Capacity must be a positive whole number.");
            }
        }

        if !draft.url.trim().is_empty() && !draft.url.validate_url() {
            errors.insert(Field::Url, "Link must be a valid URL.");
        }

        if draft.end_date_time < draft.start_date_time {
            errors.insert(Field::EndDateTime, "The event cannot end before it starts.");
        }

        errors
    }
}

fn require(errors: &mut FieldErrors, field: Field, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

/// Accepts "15", "15.50" and "15,50".
pub fn parse_price(s: &str) -> Option<f64> {
    let normalized = s.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn valid_draft() -> EventDraft {
        let start = Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap();
        let mut d = EventDraft::empty_at(start);
        d.end_date_time = start + Duration::hours(2);
        d.title = "Rust meetup".into();
        d.description = "Talks about async Rust".into();
        d.location = "Online".into();
        d.category_id = "tech".into();
        d.price = "10".into();
        d
    }

    fn schema() -> EventSchema {
        EventSchema::default()
    }

    #[test]
    fn valid_draft_passes() {
        assert!(schema().validate(&valid_draft()).is_valid());
    }

    #[test]
    fn every_required_field_reports_when_empty() {
        let d = EventDraft::empty_at(Utc::now());
        let errors = schema().validate(&d);
        for field in [
            Field::Title,
            Field::CategoryId,
            Field::Description,
            Field::Location,
            Field::Price,
        ] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
        assert_eq!(errors.get(Field::Title), Some("Title is required."));
    }

    #[test]
    fn whitespace_only_title_is_required_error() {
        let mut d = valid_draft();
        d.title = "    ".into();
        let errors = schema().validate(&d);
        assert_eq!(errors.get(Field::Title), Some("Title is required."));
    }

    #[test]
    fn length_rules_come_from_derive() {
        let mut d = valid_draft();
        d.title = "ab".into();
        d.location = "x".repeat(401);
        let errors = schema().validate(&d);
        assert_eq!(errors.get(Field::Title), Some("Title must be at least 3 characters."));
        assert_eq!(
            errors.get(Field::Location),
            Some("Location must be between 3 and 400 characters.")
        );
    }

    #[test]
    fn free_event_needs_no_price() {
        let mut d = valid_draft();
        d.price.clear();
        d.is_free = true;
        assert!(schema().validate(&d).is_valid());
    }

    #[test]
    fn text_price_accepts_free_form_but_numeric_does_not() {
        let mut d = valid_draft();
        d.price = "по договорённости".into();
        assert!(schema().validate(&d).is_valid());

        let strict = EventSchema::new(FormOptions {
            price_input: PriceInput::Numeric,
            ..FormOptions::default()
        });
        let errors = strict.validate(&d);
        assert_eq!(errors.get(Field::Price), Some("Price must be a non-negative number."));

        d.price = "12,50".into();
        assert!(strict.validate(&d).is_valid());
    }

    #[test]
    fn capacity_checked_only_when_enabled() {
        let mut d = valid_draft();
        d.capacity = "lots".into();
        assert!(schema().validate(&d).is_valid());

        let with_capacity = EventSchema::new(FormOptions {
            capacity: true,
            ..FormOptions::default()
        });
        assert!(with_capacity.validate(&d).contains(Field::Capacity));
        d.capacity = "0".into();
        assert!(with_capacity.validate(&d).contains(Field::Capacity));
        d.capacity = "150".into();
        assert!(with_capacity.validate(&d).is_valid());
        d.capacity.clear();
        assert!(with_capacity.validate(&d).is_valid());
    }

    #[test]
    fn link_is_optional_but_must_be_a_url() {
        let mut d = valid_draft();
        d.url = "not a link".into();
        assert!(schema().validate(&d).contains(Field::Url));
        d.url = "https://example.com/tickets".into();
        assert!(schema().validate(&d).is_valid());
    }

    #[test]
    fn end_before_start_is_rejected_on_end_field() {
        let mut d = valid_draft();
        d.end_date_time = d.start_date_time - Duration::minutes(1);
        let errors = schema().validate(&d);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::EndDateTime));

        d.end_date_time = d.start_date_time;
        assert!(schema().validate(&d).is_valid());
    }

    #[test]
    fn field_names_resolve_both_spellings() {
        assert_eq!(Field::from_name("categoryId"), Some(Field::CategoryId));
        assert_eq!(Field::from_name("category_id"), Some(Field::CategoryId));
        assert_eq!(Field::from_name("nope"), None);
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Title, "first");
        errors.insert(Field::Title, "second");
        assert_eq!(errors.get(Field::Title), Some("first"));
        assert_eq!(errors.len(), 1);
    }
}
