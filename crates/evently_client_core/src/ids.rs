//! Strongly-typed IDs for users, events and categories. Use these instead of raw strings.
//! IDs are issued by the backend (opaque), but they end up in URL paths, so they must be
//! non-empty and free of whitespace and `/`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

fn validate_id(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Invalid ID: empty".to_string());
    }
    if let Some(c) = s.chars().find(|c| c.is_whitespace() || *c == '/' || *c == '?' || *c == '#') {
        return Err(format!("Invalid ID: contains {:?}", c));
    }
    Ok(s.to_string())
}

/// Acting user (event organizer).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

/// Persisted event (`_id` of the record).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

/// Externally owned category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(String);

macro_rules! id_serde {
    ($name:ident) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                ser.serialize_str(&self.0)
            }
        }
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
                let s = String::deserialize(de)?;
                Self::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
id_serde!(UserId);
id_serde!(EventId);
id_serde!(CategoryId);

macro_rules! id_type {
    ($name:ident) => {
        impl $name {
            pub fn parse(s: impl AsRef<str>) -> Result<Self, String> {
                Self::from_str(s.as_ref())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
        impl FromStr for $name {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(validate_id(s.trim())?))
            }
        }
        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
id_type!(UserId);
id_type!(EventId);
id_type!(CategoryId);
