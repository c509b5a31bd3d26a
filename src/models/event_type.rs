use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Pee,
    Poop,
}

impl EventType {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pee" => Some(Self::Pee),
            "poop" => Some(Self::Poop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Pee => "pee",
            EventType::Poop => "poop",
        }
    }

    pub fn is_pee(&self) -> bool {
        matches!(self, EventType::Pee)
    }

    pub fn is_poop(&self) -> bool {
        matches!(self, EventType::Poop)
    }
}
