use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    Active,
    Canceled,
    PastDue,
    Unpaid,
}

impl SubscriptionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionState::Active => "active",
            SubscriptionState::Canceled => "canceled",
            SubscriptionState::PastDue => "past_due",
            SubscriptionState::Unpaid => "unpaid",
        }
    }
}

/// Status record received from the (mocked) payment collaborator.
/// The core only reads `is_subscribed` and `status` for gating decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    pub is_subscribed: bool,
    pub status: Option<SubscriptionState>,
    pub current_period_end: Option<DateTime<Local>>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        Self {
            is_subscribed: false,
            status: None,
            current_period_end: None,
            cancel_at_period_end: false,
        }
    }
}

impl SubscriptionStatus {
    /// Full feature access: subscribed AND in good standing.
    pub fn is_active(&self) -> bool {
        self.is_subscribed && self.status == Some(SubscriptionState::Active)
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            Some(s) => s.as_str(),
            None => "inactive",
        }
    }
}
