//! Petstore resource types
//!
//! These mirror the JSON bodies the service accepts and returns. They are used
//! to build request payloads and to read decoded fields back in test cases;
//! shape checks on raw bodies go through [`crate::schema`] instead, so an
//! unexpected field never gets silently dropped by deserialization first.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sale status of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    /// All statuses the service accepts in `findByStatus`
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pet resource, identified by `id`
///
/// Only the fields the suite asserts on are modelled; the service may return
/// more (`photoUrls`, `tags`, `category`), which are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub status: PetStatus,
}

impl Pet {
    pub fn new(id: i64, name: impl Into<String>, status: PetStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }
}

/// A store order, identified by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub pet_id: i64,
    pub quantity: i64,
    /// ISO-8601 timestamp, kept as the service sent it
    pub ship_date: String,
    pub status: String,
    pub complete: bool,
}

impl Order {
    /// Order shipping at `ship_date`, serialized as RFC 3339 UTC with a `Z` suffix
    pub fn new(
        id: i64,
        pet_id: i64,
        quantity: i64,
        ship_date: DateTime<Utc>,
        status: impl Into<String>,
        complete: bool,
    ) -> Self {
        Self {
            id,
            pet_id,
            quantity,
            ship_date: ship_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: status.into(),
            complete,
        }
    }
}
