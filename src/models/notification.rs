use serde::{Deserialize, Serialize};
use specta::Type;

#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Green,
}

/// Alert banner shown after a generate action.
#[derive(Serialize, Deserialize, Type, Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub indicator: Indicator,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".into(),
            message: message.into(),
            indicator: Indicator::Green,
        }
    }
}
