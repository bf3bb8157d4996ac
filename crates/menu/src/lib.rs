//! Panel menu model for installed snaps.
//!
//! Pure menu construction: a snapshot of installed snaps goes in, a
//! complete menu description comes out. No daemon or shell calls here.

pub mod menu;

// Re-export primary types for convenience.
pub use menu::{
    MenuAction, MenuEntry, MenuModel, MenuSection, SNAPS_TITLE, TOOLS_TITLE, sort_snaps,
};
