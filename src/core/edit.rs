use crate::core::add::compose_timestamp;
use crate::errors::AppResult;
use crate::models::event::EventPatch;
use crate::models::event_type::EventType;
use crate::store::events::EventStore;
use crate::store::kv::LocalStore;
use crate::ui::messages::{info, success, warning};
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `edit` command: a typed partial
/// update where absent fields keep their value.
pub struct EditLogic;

impl EditLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        store: &LocalStore,
        id: i64,
        kind: Option<EventType>,
        date: Option<NaiveDate>,
        at: Option<NaiveTime>,
        location: Option<String>,
        accident: Option<bool>,
        notes: Option<String>,
    ) -> AppResult<()> {
        let mut events = EventStore::open(store)?;

        let Some(current) = events.get(id) else {
            warning(format!("No event with id {}", id));
            return Ok(());
        };

        // date/time parts merge over the event's current timestamp
        let timestamp = if date.is_some() || at.is_some() {
            Some(compose_timestamp(current.timestamp, date, at))
        } else {
            None
        };

        let patch = EventPatch {
            kind,
            timestamp,
            location,
            is_accident: accident,
            notes,
        };

        if patch.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        events.update(id, patch)?;
        success(format!("Updated event #{}", id));

        Ok(())
    }
}
