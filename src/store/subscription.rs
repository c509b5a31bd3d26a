//! Load/save of the subscription-status record received from the mocked
//! payment collaborator.

use crate::errors::{AppError, AppResult};
use crate::models::subscription::SubscriptionStatus;
use crate::store::kv::LocalStore;
use crate::store::SUBSCRIPTION_KEY;

/// Absent or malformed value → never subscribed.
pub fn load(store: &LocalStore) -> AppResult<SubscriptionStatus> {
    Ok(match store.get(SUBSCRIPTION_KEY)? {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        None => SubscriptionStatus::default(),
    })
}

pub fn save(store: &LocalStore, status: &SubscriptionStatus) -> AppResult<()> {
    let raw = serde_json::to_string(status)
        .map_err(|e| AppError::Other(format!("serialize subscription: {e}")))?;
    store.put(SUBSCRIPTION_KEY, &raw)?;
    Ok(())
}
