//! Data model for the snap daemon's REST API.
//!
//! Mirrors the subset of snapd's `/v2` wire format the menu consumes:
//! installed snaps, change records and event notices. Field names follow
//! the daemon's kebab-case JSON; unknown fields are ignored so newer
//! daemon releases keep parsing.

pub mod change;
pub mod notice;
pub mod snap;

// Re-export primary types for convenience.
pub use change::{Change, ChangeFilter};
pub use notice::{Notice, NoticeKind};
pub use snap::{Confinement, Snap, SnapApp};
