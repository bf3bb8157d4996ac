//! Presentation seam between applet logic and the host shell.
//!
//! `Shell` is implemented by the host app on top of its panel, dialog
//! and notification primitives. Applet logic never talks to a toolkit
//! directly.

use std::future::Future;
use std::pin::Pin;

use snapmenu_menu::MenuModel;

/// Future returned by [`Shell`] dialog operations.
pub type ShellFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Urgency of a notification, mapped by the host onto its own levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Nothing happened and nothing is wrong (e.g. no updates found).
    Low,
    /// An action completed.
    Normal,
    /// An action failed.
    Critical,
}

/// A notification for the host to display.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub urgency: Urgency,
}

impl Notification {
    /// Low-urgency notification for "nothing to do" outcomes.
    pub fn low(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            urgency: Urgency::Low,
        }
    }

    /// Normal notification for completed actions.
    pub fn normal(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            urgency: Urgency::Normal,
        }
    }

    /// Critical notification for failed actions.
    pub fn critical(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            urgency: Urgency::Critical,
        }
    }
}

/// A modal text prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrompt {
    pub title: String,
    pub body: String,
    /// Hint text shown in the empty input field.
    pub placeholder: String,
}

/// A modal yes/no confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirm {
    pub title: String,
    pub body: String,
    pub accept_label: String,
    pub cancel_label: String,
}

/// Rendering surface provided by the host shell.
///
/// Using a trait keeps applet logic decoupled from the toolkit and
/// testable with mocks.
pub trait Shell: Send + Sync {
    /// Replaces the rendered panel menu with `menu`.
    ///
    /// Always a full replacement; the shell drops whatever it rendered
    /// before.
    fn render_menu(&self, menu: MenuModel);

    /// Posts a notification.
    fn notify(&self, note: Notification);

    /// Shows a modal text prompt. Resolves to the entered text, or
    /// `None` when the user dismissed the dialog.
    fn prompt_text(&self, req: TextPrompt) -> ShellFuture<'_, Option<String>>;

    /// Shows a modal confirmation. Resolves to `true` when accepted.
    fn confirm(&self, req: Confirm) -> ShellFuture<'_, bool>;
}
