//! Core-Domänentypen: Wegpunkt, Distanz-Helfer, Sortiermodi.

pub mod distance;
pub mod sort;
pub mod waypoint;

pub use distance::{format_distance, planar_distance};
pub use sort::SortMode;
pub use waypoint::{Waypoint, DEFAULT_COLOR, DEFAULT_ICON};
