//! Snap daemon operations trait.
//!
//! `SnapdClient` is implemented by the host app to bridge menu logic
//! to the actual snapd transport.

use std::future::Future;
use std::pin::Pin;

use snapmenu_model::{Change, ChangeFilter, Notice, Snap};
use tokio::sync::mpsc;

use crate::error::SnapdError;
use crate::notices::NoticeSubscription;

/// Future returned by [`SnapdClient`] operations.
pub type SnapdFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SnapdError>> + Send + 'a>>;

/// Abstract client for the snap daemon.
///
/// Using a trait keeps menu and dispatch logic decoupled from transport
/// and testable with mocks.
pub trait SnapdClient: Send + Sync {
    /// Fetches all installed snaps.
    fn list_snaps(&self) -> SnapdFuture<'_, Vec<Snap>>;

    /// Refreshes every snap with a pending update and resolves to the
    /// names of the snaps that were refreshed.
    ///
    /// Resolves to [`SnapdError::NothingToDo`] when everything is
    /// already current.
    fn refresh_all(&self) -> SnapdFuture<'_, Vec<String>>;

    /// Fetches change records matching `filter`.
    ///
    /// Resolves to [`SnapdError::NothingToDo`] when the daemon has no
    /// records to report.
    fn get_changes(&self, filter: ChangeFilter) -> SnapdFuture<'_, Vec<Change>>;

    /// Installs a snap by name and waits for the change to complete.
    fn install(&self, name: &str) -> SnapdFuture<'_, ()>;

    /// Removes a snap by name and waits for the change to complete.
    fn remove(&self, name: &str) -> SnapdFuture<'_, ()>;

    /// Subscribes to the daemon's notice feed.
    ///
    /// Notices arrive on the receiver in delivery order, each at most
    /// once. Delivery stops once the returned handle is unsubscribed;
    /// implementations tie their pump task to the handle's token.
    fn subscribe_notices(
        &self,
    ) -> Result<(NoticeSubscription, mpsc::Receiver<Notice>), SnapdError>;
}
