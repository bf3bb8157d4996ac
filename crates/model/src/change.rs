use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter for querying the daemon's change records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChangeFilter {
    /// Every change the daemon still remembers.
    #[default]
    All,
    /// Changes still being worked on.
    InProgress,
    /// Completed changes.
    Ready,
}

impl ChangeFilter {
    /// Query value understood by `GET /v2/changes?select=`.
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFilter::All => "all",
            ChangeFilter::InProgress => "in-progress",
            ChangeFilter::Ready => "ready",
        }
    }
}

/// A state change tracked by the daemon (install, refresh, remove, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub ready: bool,
    #[serde(
        rename = "spawn-time",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub spawn_time: Option<DateTime<Utc>>,
    #[serde(
        rename = "ready-time",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ready_time: Option<DateTime<Utc>>,
}
