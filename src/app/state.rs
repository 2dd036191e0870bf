//! Zustand des Such-Panels auf der Weltkarte.

use crate::app::WaypointListEntry;
use crate::core::{SortMode, Waypoint};
use crate::shared::SearchOptions;

/// Vom Host-Dialog gehaltener Zustand des Such-Panels.
///
/// Scroll-Position, Fokus und Texturen bleiben Sache der UI-Schicht;
/// hier liegen nur Query, Sortiermodus und die aggregierte Liste samt
/// gefilterter Sicht.
pub struct SearchPanelState {
    /// Aggregierte Wegpunkt-Liste (Host + Provider)
    pub(crate) waypoints: Vec<Waypoint>,
    /// Gefilterte und sortierte Sicht für die Listen-Darstellung
    pub(crate) entries: Vec<WaypointListEntry>,
    /// Aktuelle Query, getrimmt; leer = kein Filter
    pub(crate) query: String,
    /// Gewählter Sortiermodus
    pub(crate) sort_mode: SortMode,
    /// Laufzeit-Optionen
    pub options: SearchOptions,
}

impl SearchPanelState {
    /// Erstellt den Panel-Zustand mit leerer Liste und Standard-Sortierung.
    pub fn new(options: SearchOptions) -> Self {
        Self {
            waypoints: Vec::new(),
            entries: Vec::new(),
            query: String::new(),
            sort_mode: options.default_sort_mode,
            options,
        }
    }

    /// Anzahl der aggregierten Wegpunkte (Guard für den periodischen Refresh).
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Die aktuell anzuzeigenden Listen-Einträge.
    pub fn entries(&self) -> &[WaypointListEntry] {
        &self.entries
    }

    /// Aktuelle Query (getrimmt).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Aktueller Sortiermodus.
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }
}

impl Default for SearchPanelState {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}
