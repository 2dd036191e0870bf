//! Panel-Zustand und Use-Cases der Such-Funktion.

pub mod list_entry;
pub mod panel;
pub mod state;

pub use list_entry::{normalize_icon_code, WaypointListEntry};
pub use state::SearchPanelState;
