//! VS WaySearch Library.
//! Such-, Sortier- und Merge-Kern fuer die Wegpunkt-Liste der Weltkarte.

pub mod aggregate;
pub mod app;
pub mod core;
pub mod search;
pub mod shared;

pub use aggregate::foreign::waypoints_from_value;
pub use aggregate::{ProviderError, ProviderWaypoint, WaypointAggregator, WaypointProvider};
pub use app::{normalize_icon_code, SearchPanelState, WaypointListEntry};
pub use core::{format_distance, planar_distance, SortMode, Waypoint};
pub use shared::SearchOptions;
