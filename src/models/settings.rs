use serde::{Deserialize, Serialize};

/// Reminder preferences, persisted as a single record in the local store.
/// `reminder_times` is kept unique, ascending, and capped at 10 entries by
/// the operations in `core::reminder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderSettings {
    #[serde(default = "default_interval")]
    pub regular_interval: u32, // minutes
    #[serde(default = "default_true")]
    pub post_meal_reminder: bool,
    #[serde(default = "default_true")]
    pub post_nap_reminder: bool,
    #[serde(default)]
    pub reminder_times: Vec<String>, // "HH:MM", 24h
}

fn default_interval() -> u32 {
    120
}

fn default_true() -> bool {
    true
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            regular_interval: default_interval(),
            post_meal_reminder: true,
            post_nap_reminder: true,
            reminder_times: [
                "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        }
    }
}
