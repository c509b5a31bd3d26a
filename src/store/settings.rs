//! Load/save of the reminder-settings record.

use crate::errors::{AppError, AppResult};
use crate::models::settings::ReminderSettings;
use crate::store::kv::LocalStore;
use crate::store::SETTINGS_KEY;

/// Absent or malformed value → defaults.
pub fn load(store: &LocalStore) -> AppResult<ReminderSettings> {
    Ok(match store.get(SETTINGS_KEY)? {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        None => ReminderSettings::default(),
    })
}

pub fn save(store: &LocalStore, settings: &ReminderSettings) -> AppResult<()> {
    let raw = serde_json::to_string(settings)
        .map_err(|e| AppError::Other(format!("serialize settings: {e}")))?;
    store.put(SETTINGS_KEY, &raw)?;
    Ok(())
}
