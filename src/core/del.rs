use crate::errors::AppResult;
use crate::store::events::EventStore;
use crate::store::kv::LocalStore;
use crate::ui::messages::{info, warning};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Idempotent delete: removing an unknown id is a warned no-op, not an
    /// error.
    pub fn apply(store: &LocalStore, id: i64) -> AppResult<()> {
        let mut events = EventStore::open(store)?;

        if events.delete(id)? {
            info(format!("Deleted event #{}", id));
        } else {
            warning(format!("No event with id {}", id));
        }

        Ok(())
    }
}
