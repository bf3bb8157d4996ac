//! Menu description for the snap panel menu.
//!
//! `MenuModel::build` maps a snap snapshot to the menu wholesale; the
//! host shell turns the description into real widgets. A rebuild always
//! produces the full menu, never an incremental patch.

use snapmenu_model::Snap;

/// Title of the fixed tools section.
pub const TOOLS_TITLE: &str = "Tools";
/// Title of the installed snaps section.
pub const SNAPS_TITLE: &str = "Installed snaps";

/// Actions that can be triggered from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Refresh all snaps with pending updates.
    RefreshAll,
    /// Show the daemon's recent change records.
    RecentChanges,
    /// Ask for a snap name and install it.
    InstallPrompt,
    /// Show metadata for one installed snap.
    Details { snap: String },
    /// Show the applications one installed snap ships.
    Apps { snap: String },
    /// Remove one installed snap.
    Remove { snap: String },
}

/// A single menu entry, possibly with a nested submenu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    /// Display text.
    pub label: String,
    /// Whether the entry is activatable.
    pub enabled: bool,
    /// Optional action triggered on activation.
    pub action: Option<MenuAction>,
    /// Nested entries, rendered as a submenu.
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    /// Leaf entry that triggers `action`.
    fn action(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            action: Some(action),
            children: Vec::new(),
        }
    }

    /// Entry that opens a submenu.
    fn submenu(label: impl Into<String>, children: Vec<MenuEntry>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            action: None,
            children,
        }
    }
}

/// One titled section of the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub title: String,
    pub entries: Vec<MenuEntry>,
}

/// Full description of the panel menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuModel {
    /// Fixed section with daemon-wide actions.
    pub tools: MenuSection,
    /// One entry per installed snap, in snapshot order.
    pub snaps: MenuSection,
}

impl MenuModel {
    /// Builds the menu from a snap snapshot.
    ///
    /// Input order is preserved; sort the slice first (see
    /// [`sort_snaps`]) for an alphabetical menu.
    pub fn build(snaps: &[Snap]) -> Self {
        let tools = MenuSection {
            title: TOOLS_TITLE.into(),
            entries: vec![
                MenuEntry::action("Refresh snaps", MenuAction::RefreshAll),
                MenuEntry::action("Recent changes", MenuAction::RecentChanges),
                MenuEntry::action("Install snap…", MenuAction::InstallPrompt),
            ],
        };

        let snaps = MenuSection {
            title: SNAPS_TITLE.into(),
            entries: snaps.iter().map(snap_entry).collect(),
        };

        Self { tools, snaps }
    }

    /// Menu with no snap entries, shown before the first fetch and
    /// after deactivation.
    pub fn empty() -> Self {
        Self::build(&[])
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::empty()
    }
}

fn snap_entry(snap: &Snap) -> MenuEntry {
    let name = &snap.name;
    MenuEntry::submenu(
        name.clone(),
        vec![
            MenuEntry::action("Details", MenuAction::Details { snap: name.clone() }),
            MenuEntry::action("Apps", MenuAction::Apps { snap: name.clone() }),
            MenuEntry::action("Remove", MenuAction::Remove { snap: name.clone() }),
        ],
    )
}

/// Sorts snaps by name, ascending.
///
/// Plain byte-wise `str` ordering: total, case-sensitive and
/// locale-independent.
pub fn sort_snaps(snaps: &mut [Snap]) {
    snaps.sort_by(|a, b| a.name.cmp(&b.name));
}
