//! snapd client error type.

/// Errors surfaced by a [`SnapdClient`](crate::SnapdClient) operation.
///
/// The taxonomy is deliberately small: either the daemon had nothing to
/// act on, or it failed with a message that is shown to the user
/// verbatim.
#[derive(Debug, thiserror::Error)]
pub enum SnapdError {
    /// The operation found no work (no updates pending, no change
    /// records yet). Not a failure.
    #[error("nothing to do")]
    NothingToDo,

    /// Any other daemon or transport failure, carrying the daemon's
    /// own message.
    #[error("{0}")]
    Daemon(String),
}
