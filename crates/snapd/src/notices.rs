//! Notice subscription handle.

use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle for an active notice subscription.
///
/// Wraps the cancellation token the client implementation tied its
/// delivery task to. Teardown is explicit: dropping the handle does not
/// unsubscribe.
#[derive(Debug)]
pub struct NoticeSubscription {
    cancel: CancellationToken,
}

impl NoticeSubscription {
    /// Creates a handle around the delivery task's cancellation token.
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Stops notice delivery. Safe to call more than once.
    pub fn unsubscribe(&self) {
        if !self.cancel.is_cancelled() {
            self.cancel.cancel();
            debug!("notice subscription cancelled");
        }
    }

    /// Whether the subscription is still delivering notices.
    pub fn is_active(&self) -> bool {
        !self.cancel.is_cancelled()
    }
}
