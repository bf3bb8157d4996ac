use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confinement mode of an installed snap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confinement {
    Strict,
    Devmode,
    Classic,
    /// Forward compatibility: unknown confinement modes deserialize here.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for Confinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confinement::Strict => "strict",
            Confinement::Devmode => "devmode",
            Confinement::Classic => "classic",
            Confinement::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// An application shipped by a snap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapApp {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap: Option<String>,
    /// Daemon type (`simple`, `oneshot`, ...) when the app is a service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daemon: Option<String>,
}

/// An installed snap as reported by `GET /v2/snaps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snap {
    pub name: String,
    /// Human-friendly title from the store; often absent for CLI snaps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub revision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default)]
    pub confinement: Confinement,
    #[serde(
        rename = "install-date",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub install_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apps: Vec<SnapApp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_parses_daemon_payload() {
        // Trimmed from a real `GET /v2/snaps` response; extra fields
        // (summary, status, ...) must be ignored.
        let json = r#"{
            "id": "mVyGrEwiqSi5PugEwVbaZqLNj2ySCvDW",
            "name": "firefox",
            "title": "Firefox",
            "summary": "Mozilla Firefox web browser",
            "version": "126.0-2",
            "revision": "4336",
            "channel": "latest/stable",
            "tracking-channel": "latest/stable",
            "confinement": "strict",
            "type": "app",
            "status": "active",
            "install-date": "2024-05-14T09:02:12.64558803Z",
            "apps": [
                {"snap": "firefox", "name": "firefox"},
                {"snap": "firefox", "name": "geckodriver"}
            ]
        }"#;
        let snap: Snap = serde_json::from_str(json).unwrap();
        assert_eq!(snap.name, "firefox");
        assert_eq!(snap.title.as_deref(), Some("Firefox"));
        assert_eq!(snap.version, "126.0-2");
        assert_eq!(snap.revision, "4336");
        assert_eq!(snap.channel.as_deref(), Some("latest/stable"));
        assert_eq!(snap.confinement, Confinement::Strict);
        assert!(snap.install_date.is_some());
        assert_eq!(snap.apps.len(), 2);
        assert_eq!(snap.apps[1].name, "geckodriver");
    }

    #[test]
    fn snap_parses_sparse_payload() {
        let snap: Snap = serde_json::from_str(r#"{"name":"core"}"#).unwrap();
        assert_eq!(snap.name, "core");
        assert_eq!(snap.title, None);
        assert_eq!(snap.confinement, Confinement::Unknown);
        assert!(snap.apps.is_empty());
    }

    #[test]
    fn snap_omits_empty_fields() {
        let json = serde_json::to_string(&Snap {
            name: "htop".into(),
            ..Snap::default()
        })
        .unwrap();
        assert!(!json.contains("install-date"));
        assert!(!json.contains("apps"));
        assert!(!json.contains("title"));
    }

    #[test]
    fn confinement_wire_names() {
        assert_eq!(
            serde_json::from_str::<Confinement>("\"classic\"").unwrap(),
            Confinement::Classic
        );
        assert_eq!(
            serde_json::to_string(&Confinement::Devmode).unwrap(),
            "\"devmode\""
        );
    }

    #[test]
    fn confinement_unknown_fallback() {
        let c: Confinement = serde_json::from_str("\"jailmode\"").unwrap();
        assert_eq!(c, Confinement::Unknown);
        assert_eq!(c.to_string(), "unknown");
    }
}
