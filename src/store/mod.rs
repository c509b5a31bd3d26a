pub mod events;
pub mod info;
pub mod kv;
pub mod settings;
pub mod subscription;

/// Fixed keys of the three logical records in the local store.
pub const EVENTS_KEY: &str = "potty_events";
pub const SETTINGS_KEY: &str = "reminder_settings";
pub const SUBSCRIPTION_KEY: &str = "subscription";
