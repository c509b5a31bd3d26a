//! The event collection and its persistence contract: the entire collection
//! is serialized to JSON and written under a fixed key on every mutation.

use crate::errors::AppResult;
use crate::models::event::{EventDraft, EventPatch, PottyEvent};
use crate::models::subscription::SubscriptionStatus;
use crate::store::kv::LocalStore;
use crate::store::EVENTS_KEY;
use serde::{Deserialize, Serialize};

/// Event cap for non-subscribed usage.
pub const FREE_EVENT_QUOTA: usize = 10;

/// Result of an `add` attempt. Hitting the free-plan quota is a refusal
/// signal, not an error.
#[derive(Debug, Clone)]
pub enum AddOutcome {
    Added(PottyEvent),
    QuotaExceeded,
}

#[derive(Debug, Serialize, Deserialize)]
struct EventsRecord {
    #[serde(default = "first_id")]
    next_id: i64,
    #[serde(default)]
    events: Vec<PottyEvent>,
}

fn first_id() -> i64 {
    1
}

impl Default for EventsRecord {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            events: Vec::new(),
        }
    }
}

pub struct EventStore<'a> {
    store: &'a LocalStore,
    record: EventsRecord,
}

impl<'a> EventStore<'a> {
    /// Load the collection from the local store. An absent or malformed
    /// value yields an empty collection, not an error.
    pub fn open(store: &'a LocalStore) -> AppResult<Self> {
        let record = match store.get(EVENTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => EventsRecord::default(),
        };
        Ok(Self { store, record })
    }

    /// Current snapshot in insertion order (newest first).
    pub fn events(&self) -> &[PottyEvent] {
        &self.record.events
    }

    pub fn len(&self) -> usize {
        self.record.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.events.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&PottyEvent> {
        self.record.events.iter().find(|e| e.id == id)
    }

    /// Add a new event, subject to the free-plan quota. Ids come from a
    /// persisted monotonic counter and are never reused.
    pub fn add(&mut self, draft: EventDraft, gate: &SubscriptionStatus) -> AppResult<AddOutcome> {
        if !gate.is_subscribed && self.record.events.len() >= FREE_EVENT_QUOTA {
            return Ok(AddOutcome::QuotaExceeded);
        }

        let event = PottyEvent {
            id: self.record.next_id,
            kind: draft.kind,
            timestamp: draft.timestamp,
            location: draft.location,
            is_accident: draft.is_accident,
            notes: draft.notes,
        };
        self.record.next_id += 1;
        self.record.events.insert(0, event.clone());
        self.persist()?;

        Ok(AddOutcome::Added(event))
    }

    /// Merge the patch into the matching record. Unknown ids are a silent
    /// no-op (returns false, nothing written).
    pub fn update(&mut self, id: i64, patch: EventPatch) -> AppResult<bool> {
        let Some(event) = self.record.events.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        if patch.is_empty() {
            return Ok(true);
        }
        event.apply(patch);
        self.persist()?;
        Ok(true)
    }

    /// Remove the matching record. Idempotent: deleting an unknown id is a
    /// silent no-op.
    pub fn delete(&mut self, id: i64) -> AppResult<bool> {
        let before = self.record.events.len();
        self.record.events.retain(|e| e.id != id);
        if self.record.events.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.record)
            .map_err(|e| crate::errors::AppError::Other(format!("serialize events: {e}")))?;
        self.store.put(EVENTS_KEY, &raw)?;
        Ok(())
    }
}
