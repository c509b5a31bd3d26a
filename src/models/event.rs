use super::event_type::EventType;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single logged potty occurrence.
/// `id` is assigned by the event store and never reused; everything else is
/// user-editable after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PottyEvent {
    pub id: i64,
    pub kind: EventType,
    pub timestamp: DateTime<Local>, // serialized as RFC 3339
    pub location: String,
    pub is_accident: bool,
    #[serde(default)]
    pub notes: String,
}

impl PottyEvent {
    /// Calendar day the event belongs to (local time).
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    /// Group label: blank locations count as "Unknown" in analytics.
    pub fn location_label(&self) -> &str {
        if self.location.trim().is_empty() {
            "Unknown"
        } else {
            &self.location
        }
    }

    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(ts) = patch.timestamp {
            self.timestamp = ts;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(acc) = patch.is_accident {
            self.is_accident = acc;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Event fields without an id, as handed to `EventStore::add`.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub kind: EventType,
    pub timestamp: DateTime<Local>,
    pub location: String,
    pub is_accident: bool,
    pub notes: String,
}

/// Typed partial update: `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub kind: Option<EventType>,
    pub timestamp: Option<DateTime<Local>>,
    pub location: Option<String>,
    pub is_accident: Option<bool>,
    pub notes: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.timestamp.is_none()
            && self.location.is_none()
            && self.is_accident.is_none()
            && self.notes.is_none()
    }
}
