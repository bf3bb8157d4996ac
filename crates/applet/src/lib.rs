//! Snap menu applet logic.
//!
//! This crate implements the **behavior** of a panel menu for installed
//! snaps. It is a library crate with no toolkit or transport
//! dependencies: the host app provides a `SnapdClient` implementation
//! that talks to the daemon and a `Shell` implementation that renders
//! menus, notifications and dialogs.
//!
//! # Operations
//!
//! - **Menu** — rebuild the panel menu from the installed snap list
//! - **Refresh** — update all snaps and report what changed
//! - **Changes** — show the daemon's recent change records
//! - **Install / Remove** — prompted install and confirmed removal
//! - **Notices** — daemon event feed drives automatic menu rebuilds

pub mod applet;
pub mod config;
pub mod dispatcher;
pub mod shell;

// Re-export primary types for convenience.
pub use applet::SnapApplet;
pub use config::AppletConfig;
pub use dispatcher::ActionDispatcher;
pub use shell::{Confirm, Notification, Shell, ShellFuture, TextPrompt, Urgency};
