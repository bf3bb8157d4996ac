fn main() {
    println!("Run `cargo test -p snapd-compat` to execute snapd compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use snapmenu_model::{Change, Confinement, Notice, NoticeKind, Snap};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Extracts the `result` payload from a snapd response envelope and
    /// deserializes it as a list of `T`.
    fn result_list<T>(name: &str) -> Vec<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let fixture = load_fixture(name);
        assert_eq!(fixture["type"], "sync", "unexpected envelope in {name}");
        serde_json::from_value(fixture["result"].clone())
            .unwrap_or_else(|e| panic!("failed to deserialize result of {name}: {e}"))
    }

    // --- GET /v2/snaps ---

    #[test]
    fn snaps_response_parses() {
        let snaps: Vec<Snap> = result_list("snaps_response.json");
        assert_eq!(snaps.len(), 3);

        let firefox = &snaps[0];
        assert_eq!(firefox.name, "firefox");
        assert_eq!(firefox.title.as_deref(), Some("Firefox"));
        assert_eq!(firefox.version, "126.0-2");
        assert_eq!(firefox.revision, "4336");
        assert_eq!(firefox.channel.as_deref(), Some("latest/stable"));
        assert_eq!(firefox.confinement, Confinement::Strict);
        assert_eq!(firefox.apps.len(), 2);
        assert_eq!(firefox.apps[0].name, "firefox");
        assert_eq!(firefox.apps[0].snap.as_deref(), Some("firefox"));
        assert_eq!(firefox.apps[1].name, "geckodriver");
    }

    #[test]
    fn snaps_response_kebab_case_timestamps() {
        let snaps: Vec<Snap> = result_list("snaps_response.json");
        let htop = snaps.iter().find(|s| s.name == "htop").unwrap();
        let installed = htop.install_date.expect("install-date must map");
        assert_eq!(installed.to_rfc3339(), "2025-03-18T09:14:05.180237+00:00");
    }

    #[test]
    fn snaps_response_sparse_fields() {
        let snaps: Vec<Snap> = result_list("snaps_response.json");
        // `core` ships no apps and reports an empty channel string.
        let core = snaps.iter().find(|s| s.name == "core").unwrap();
        assert_eq!(core.channel.as_deref(), Some(""));
        assert!(core.apps.is_empty());
        // `htop` carries no store title at all.
        let htop = snaps.iter().find(|s| s.name == "htop").unwrap();
        assert_eq!(htop.title, None);
    }

    // --- GET /v2/changes ---

    #[test]
    fn changes_response_parses() {
        let changes: Vec<Change> = result_list("changes_response.json");
        assert_eq!(changes.len(), 3);

        let refresh = &changes[0];
        assert_eq!(refresh.id, "92");
        assert_eq!(refresh.kind.as_deref(), Some("auto-refresh"));
        assert_eq!(refresh.summary, "Auto-refresh snap \"firefox\"");
        assert_eq!(refresh.status.as_deref(), Some("Done"));
        assert!(refresh.ready);
        assert!(refresh.ready_time.unwrap() > refresh.spawn_time.unwrap());
    }

    #[test]
    fn changes_response_in_progress_has_no_ready_time() {
        let changes: Vec<Change> = result_list("changes_response.json");
        let install = changes.iter().find(|c| c.id == "93").unwrap();
        assert!(!install.ready);
        assert!(install.spawn_time.is_some());
        assert_eq!(install.ready_time, None);
    }

    // --- GET /v2/notices ---

    #[test]
    fn notices_response_parses() {
        let notices: Vec<Notice> = result_list("notices_response.json");
        assert_eq!(notices.len(), 3);

        let change_update = &notices[0];
        assert_eq!(change_update.id, "17");
        assert_eq!(change_update.kind, NoticeKind::ChangeUpdate);
        assert_eq!(change_update.key, "92");
        assert!(change_update.last_occurred.is_some());

        assert_eq!(notices[1].kind, NoticeKind::RefreshInhibit);
    }

    #[test]
    fn notices_response_unknown_kind_falls_back() {
        let notices: Vec<Notice> = result_list("notices_response.json");
        // snapd reports kinds this client does not model (here a
        // `warning` notice); they must still parse.
        let warning = notices.iter().find(|n| n.id == "19").unwrap();
        assert_eq!(warning.kind, NoticeKind::Unknown);
        assert_eq!(warning.key, "disk space low");
    }
}
