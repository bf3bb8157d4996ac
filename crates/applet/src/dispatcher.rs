//! Maps menu actions to daemon calls and user notifications.
//!
//! Every flow issues at most one daemon call and reports its outcome
//! through a single notification. Failures never propagate out of a
//! flow; the notification is the error path.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use snapmenu_menu::{MenuAction, MenuModel, sort_snaps};
use snapmenu_model::{Change, ChangeFilter, Snap};
use snapmenu_snapd::{SnapdClient, SnapdError};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::shell::{Confirm, Notification, Shell, TextPrompt};

/// Notification title for one action topic.
pub(crate) fn topic_title(topic: &str) -> String {
    format!("Snap Menu: {topic}")
}

/// Maps menu actions to daemon calls and user notifications.
///
/// Owns the snap snapshot the menu was last built from. All methods
/// take `&self`; the host can dispatch from any task.
pub struct ActionDispatcher {
    client: Arc<dyn SnapdClient>,
    shell: Arc<dyn Shell>,
    snapshot: RwLock<Vec<Snap>>,
    rebuild_in_flight: AtomicBool,
    rebuild_queued: AtomicBool,
}

impl ActionDispatcher {
    /// Creates a dispatcher over the given daemon client and shell.
    pub fn new(client: Arc<dyn SnapdClient>, shell: Arc<dyn Shell>) -> Self {
        Self {
            client,
            shell,
            snapshot: RwLock::new(Vec::new()),
            rebuild_in_flight: AtomicBool::new(false),
            rebuild_queued: AtomicBool::new(false),
        }
    }

    /// Routes an activated menu entry to its flow.
    pub async fn dispatch(&self, action: MenuAction) {
        match action {
            MenuAction::RefreshAll => self.refresh_all().await,
            MenuAction::RecentChanges => self.recent_changes().await,
            MenuAction::InstallPrompt => self.install_flow().await,
            MenuAction::Details { snap } => self.details(&snap).await,
            MenuAction::Apps { snap } => self.apps(&snap).await,
            MenuAction::Remove { snap } => self.remove_flow(&snap).await,
        }
    }

    /// Snaps the menu was last built from, sorted by name.
    pub async fn installed_snaps(&self) -> Vec<Snap> {
        self.snapshot.read().await.clone()
    }

    /// Fetches the snap list and renders the menu.
    ///
    /// Rebuilds requested while one is in flight coalesce into a single
    /// follow-up; at most one `list_snaps` call is ever outstanding.
    pub async fn rebuild_menu(&self) {
        if self.rebuild_in_flight.swap(true, Ordering::SeqCst) {
            self.rebuild_queued.store(true, Ordering::SeqCst);
            debug!("menu rebuild already in flight, queued");
            return;
        }

        loop {
            self.rebuild_once().await;

            if self.rebuild_queued.swap(false, Ordering::SeqCst) {
                continue;
            }
            self.rebuild_in_flight.store(false, Ordering::SeqCst);

            // A rebuild may have been queued between the two stores. If
            // nobody claimed the flag since, serve it here; otherwise
            // the new holder will.
            if self.rebuild_queued.swap(false, Ordering::SeqCst) {
                if !self.rebuild_in_flight.swap(true, Ordering::SeqCst) {
                    continue;
                }
                self.rebuild_queued.store(true, Ordering::SeqCst);
            }
            return;
        }
    }

    async fn rebuild_once(&self) {
        match self.client.list_snaps().await {
            Ok(mut snaps) => {
                sort_snaps(&mut snaps);
                let menu = MenuModel::build(&snaps);
                debug!(snaps = snaps.len(), "menu rebuilt");
                *self.snapshot.write().await = snaps;
                self.shell.render_menu(menu);
            }
            Err(e) => {
                warn!(error = %e, "failed to list snaps, keeping current menu");
                self.notify_error("update", &e);
            }
        }
    }

    /// Refreshes every snap with a pending update.
    pub async fn refresh_all(&self) {
        debug!("refreshing all snaps");
        match self.client.refresh_all().await {
            Ok(names) => {
                self.shell.notify(Notification::normal(
                    topic_title("refresh"),
                    format!("Refreshed snaps: {}.", names.join(" ")),
                ));
            }
            Err(SnapdError::NothingToDo) => {
                self.shell.notify(Notification::low(
                    topic_title("refresh"),
                    "No refresh found.",
                ));
            }
            Err(e) => self.notify_error("refresh", &e),
        }
    }

    /// Shows the daemon's recent change records.
    pub async fn recent_changes(&self) {
        match self.client.get_changes(ChangeFilter::All).await {
            Ok(changes) if changes.is_empty() => self.notify_no_changes(),
            Ok(changes) => {
                self.shell.notify(Notification::normal(
                    topic_title("changes"),
                    format_changes(changes),
                ));
            }
            Err(SnapdError::NothingToDo) => self.notify_no_changes(),
            Err(e) => self.notify_error("changes", &e),
        }
    }

    /// Asks for a snap name and installs it.
    ///
    /// A dismissed dialog or blank input means no daemon call at all.
    pub async fn install_flow(&self) {
        let answer = self
            .shell
            .prompt_text(TextPrompt {
                title: topic_title("install"),
                body: "Name of the snap to install:".into(),
                placeholder: "snap name".into(),
            })
            .await;

        let Some(input) = answer else {
            debug!("install prompt dismissed");
            return;
        };
        let name = input.trim();
        if name.is_empty() {
            debug!("install prompt returned an empty name, nothing to do");
            return;
        }

        debug!(snap = %name, "installing snap");
        match self.client.install(name).await {
            Ok(()) => {
                self.shell.notify(Notification::normal(
                    topic_title("install"),
                    format!("Installed {name}."),
                ));
            }
            Err(e) => self.notify_error("install", &e),
        }
    }

    /// Confirms and removes one snap.
    pub async fn remove_flow(&self, name: &str) {
        let accepted = self
            .shell
            .confirm(Confirm {
                title: topic_title("remove"),
                body: format!("Remove snap {name}?"),
                accept_label: "Remove".into(),
                cancel_label: "Cancel".into(),
            })
            .await;

        if !accepted {
            debug!(snap = %name, "removal not confirmed");
            return;
        }

        debug!(snap = %name, "removing snap");
        match self.client.remove(name).await {
            Ok(()) => {
                self.shell.notify(Notification::normal(
                    topic_title("remove"),
                    format!("Removed {name}."),
                ));
            }
            Err(e) => self.notify_error("remove", &e),
        }
    }

    /// Shows metadata for one snap from the cached snapshot.
    pub async fn details(&self, name: &str) {
        let snapshot = self.snapshot.read().await;
        match snapshot.iter().find(|s| s.name == name) {
            Some(snap) => {
                self.shell.notify(Notification::normal(
                    topic_title("details"),
                    format_details(snap),
                ));
            }
            None => self.notify_unknown_snap("details", name),
        }
    }

    /// Shows the applications one snap ships.
    pub async fn apps(&self, name: &str) {
        let snapshot = self.snapshot.read().await;
        match snapshot.iter().find(|s| s.name == name) {
            Some(snap) => {
                self.shell
                    .notify(Notification::normal(topic_title("apps"), format_apps(snap)));
            }
            None => self.notify_unknown_snap("apps", name),
        }
    }

    fn notify_no_changes(&self) {
        self.shell
            .notify(Notification::low(topic_title("changes"), "No changes."));
    }

    fn notify_error(&self, topic: &str, error: &SnapdError) {
        self.shell.notify(Notification::critical(
            topic_title(topic),
            format!("Error: {error}"),
        ));
    }

    fn notify_unknown_snap(&self, topic: &str, name: &str) {
        warn!(snap = %name, "snap not in the current snapshot");
        self.shell.notify(Notification::critical(
            topic_title(topic),
            format!("Error: snap {name} not found."),
        ));
    }
}

/// Renders one snap's metadata as notification body lines.
fn format_details(snap: &Snap) -> String {
    let installed = snap
        .install_date
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string());
    [
        format!("Name: {}", snap.name),
        format!("Title: {}", or_na(snap.title.as_deref())),
        format!("Version: {}", or_na(Some(snap.version.as_str()))),
        format!("Revision: {}", or_na(Some(snap.revision.as_str()))),
        format!("Channel: {}", or_na(snap.channel.as_deref())),
        format!("Confinement: {}", snap.confinement),
        format!("Installed: {}", or_na(installed.as_deref())),
    ]
    .join("\n")
}

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

/// App names one per line, or a placeholder for app-less snaps.
fn format_apps(snap: &Snap) -> String {
    if snap.apps.is_empty() {
        return "No apps.".into();
    }
    snap.apps
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Change summaries one per line, most recently completed first.
///
/// Stable sort on `ready_time` descending; unfinished changes (no ready
/// time) keep daemon order at the end.
fn format_changes(mut changes: Vec<Change>) -> String {
    changes.sort_by(|a, b| b.ready_time.cmp(&a.ready_time));
    changes
        .iter()
        .map(|c| c.summary.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
