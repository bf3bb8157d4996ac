//! Applet lifecycle: activation, notice-driven rebuilds, teardown.

use std::sync::Arc;
use std::time::Duration;

use snapmenu_menu::{MenuAction, MenuModel};
use snapmenu_model::Notice;
use snapmenu_snapd::{NoticeSubscription, SnapdClient};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::AppletConfig;
use crate::dispatcher::{ActionDispatcher, topic_title};
use crate::shell::{Notification, Shell};

/// Panel presence for the snap menu.
///
/// Owns the dispatcher and drives the lifecycle: [`activate`] runs the
/// first menu build and starts the notice-driven rebuild loop,
/// [`deactivate`] tears both down. The host holds one `SnapApplet` and
/// calls the pair around panel attach and detach.
///
/// [`activate`]: SnapApplet::activate
/// [`deactivate`]: SnapApplet::deactivate
pub struct SnapApplet {
    client: Arc<dyn SnapdClient>,
    shell: Arc<dyn Shell>,
    dispatcher: Arc<ActionDispatcher>,
    config: AppletConfig,
    active: Mutex<Option<ActiveState>>,
}

/// Everything owned by one activation cycle.
struct ActiveState {
    cancel: CancellationToken,
    subscription: Option<NoticeSubscription>,
    notice_task: Option<JoinHandle<()>>,
}

impl SnapApplet {
    /// Creates an inactive applet over the given client and shell.
    pub fn new(
        client: Arc<dyn SnapdClient>,
        shell: Arc<dyn Shell>,
        config: AppletConfig,
    ) -> Self {
        let dispatcher = Arc::new(ActionDispatcher::new(client.clone(), shell.clone()));
        Self {
            client,
            shell,
            dispatcher,
            config,
            active: Mutex::new(None),
        }
    }

    /// Icon the host should show on the panel button.
    pub fn icon_name(&self) -> &str {
        &self.config.icon_name
    }

    /// Routes an activated menu entry to its action flow.
    pub async fn dispatch(&self, action: MenuAction) {
        self.dispatcher.dispatch(action).await;
    }

    /// Activates the applet: subscribes to daemon notices, builds the
    /// initial menu and starts the rebuild loop.
    ///
    /// Never fails. A notice subscription error is reported and the
    /// applet continues without live updates. Calling this while active
    /// logs a warning and does nothing.
    pub async fn activate(&self) {
        let mut active = self.active.lock().await;
        if active.is_some() {
            warn!("activate called while already active");
            return;
        }

        let cancel = CancellationToken::new();
        let mut subscription = None;
        let mut notice_task = None;

        match self.client.subscribe_notices() {
            Ok((handle, notices)) => {
                let dispatcher = self.dispatcher.clone();
                let loop_cancel = cancel.child_token();
                let debounce = self.config.notice_debounce;
                notice_task = Some(tokio::spawn(async move {
                    notice_loop(dispatcher, notices, loop_cancel, debounce).await;
                }));
                subscription = Some(handle);
            }
            Err(e) => {
                warn!(error = %e, "notice subscription failed, live updates disabled");
                self.shell.notify(Notification::critical(
                    topic_title("notices"),
                    format!("Error: {e}"),
                ));
            }
        }

        self.dispatcher.rebuild_menu().await;

        *active = Some(ActiveState {
            cancel,
            subscription,
            notice_task,
        });
        info!("snap menu applet activated");
    }

    /// Deactivates the applet: stops the rebuild loop, unsubscribes
    /// from notices and clears the rendered menu.
    ///
    /// Idempotent; deactivating an inactive applet does nothing.
    pub async fn deactivate(&self) {
        let mut active = self.active.lock().await;
        let Some(state) = active.take() else {
            debug!("deactivate called while not active");
            return;
        };

        state.cancel.cancel();
        if let Some(task) = state.notice_task {
            let _ = task.await;
        }
        if let Some(subscription) = state.subscription {
            subscription.unsubscribe();
        }

        self.shell.render_menu(MenuModel::empty());
        info!("snap menu applet deactivated");
    }
}

/// Turns daemon notices into debounced menu rebuilds.
///
/// One rebuild per burst: after the first notice, wait out the debounce
/// window, drain whatever else queued up, then rebuild once. Runs until
/// `cancel` fires or the notice channel closes.
async fn notice_loop(
    dispatcher: Arc<ActionDispatcher>,
    mut notices: mpsc::Receiver<Notice>,
    cancel: CancellationToken,
    debounce: Duration,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            maybe = notices.recv() => {
                let Some(notice) = maybe else {
                    debug!("notice channel closed");
                    break;
                };
                debug!(id = %notice.id, kind = ?notice.kind, "notice received");

                if !debounce.is_zero() {
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = tokio::time::sleep(debounce) => {}
                    }
                }

                // Collapse the rest of the burst into this rebuild.
                while notices.try_recv().is_ok() {}

                dispatcher.rebuild_menu().await;
            }
        }
    }
    debug!("notice loop stopped");
}
