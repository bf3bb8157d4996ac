//! Client seam for the snap daemon.
//!
//! `SnapdClient` is implemented by the host app to bridge menu logic to
//! the actual snapd transport (REST over the local UNIX socket, or a
//! platform binding). Menu and dispatch code only ever sees this trait.

pub mod client;
pub mod error;
pub mod notices;

// Re-export primary types for convenience.
pub use client::{SnapdClient, SnapdFuture};
pub use error::SnapdError;
pub use notices::NoticeSubscription;
