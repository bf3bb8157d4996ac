use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a daemon notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeKind {
    /// A change record was spawned, updated or completed.
    ChangeUpdate,
    /// A pending refresh is held back by a running app.
    RefreshInhibit,
    /// A snap app was prevented from running during a refresh.
    SnapRunInhibit,
    /// Forward compatibility: unknown notice kinds deserialize here.
    #[serde(other)]
    #[default]
    Unknown,
}

/// An event notice reported by `GET /v2/notices`.
///
/// Notices are the daemon's low-cost event feed. The menu uses them only
/// as a rebuild trigger; the payload itself is informational.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NoticeKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(
        rename = "last-occurred",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_occurred: Option<DateTime<Utc>>,
}
