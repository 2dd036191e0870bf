//! Use-Cases des Such-Panels: Eingabe-Events des Host-Dialogs.
//!
//! Der Host ruft diese Funktionen synchron aus seinem Event-Dispatch
//! auf (Text geändert, Sortierung gewählt, Karte umgeschaltet,
//! periodischer Tick). Eigene Timer oder Callbacks gibt es hier nicht.

use glam::DVec3;

use crate::aggregate::WaypointAggregator;
use crate::app::{SearchPanelState, WaypointListEntry};
use crate::core::{SortMode, Waypoint};
use crate::search;

/// Der Suchtext hat sich geändert.
pub fn text_changed(state: &mut SearchPanelState, text: &str, player_pos: DVec3) {
    state.query = text.trim().to_string();
    rebuild_view(state, player_pos);
}

/// Ein anderer Sortiermodus wurde gewählt; die aktuelle Query bleibt aktiv.
pub fn sort_changed(state: &mut SearchPanelState, mode: SortMode, player_pos: DVec3) {
    state.sort_mode = mode;
    rebuild_view(state, player_pos);
}

/// Ersetzt die aggregierte Liste nach einem Refresh.
///
/// Eine aktive Query wird auf die neue Liste erneut angewendet, sonst
/// wird die komplette Liste neu sortiert.
pub fn set_waypoints(state: &mut SearchPanelState, waypoints: Vec<Waypoint>, player_pos: DVec3) {
    state.waypoints = waypoints;
    rebuild_view(state, player_pos);
}

/// Die Karte wurde geöffnet oder geschlossen: Query zurücksetzen und die
/// volle sortierte Liste zeigen.
pub fn map_toggled(state: &mut SearchPanelState, player_pos: DVec3) {
    state.query.clear();
    rebuild_view(state, player_pos);
}

/// Periodischer Refresh der aggregierten Liste (Timer liegt beim Host,
/// Kadenz siehe `SearchOptions::refresh_interval_ms`).
///
/// Führt Host-Liste und Provider zusammen und übernimmt das Ergebnis
/// nur wenn sich die Anzahl gegenüber der gehaltenen Liste geändert hat.
pub fn refresh_from_sources(
    state: &mut SearchPanelState,
    primary: &[Waypoint],
    aggregator: &WaypointAggregator,
    player_pos: DVec3,
) {
    let merged = aggregator.merge(primary);
    if merged.len() == state.waypoints.len() {
        return;
    }

    log::debug!("Wegpunkt-Liste aktualisiert: {} Einträge", merged.len());
    set_waypoints(state, merged, player_pos);
}

/// Baut die gefilterte und sortierte Sicht neu auf.
fn rebuild_view(state: &mut SearchPanelState, player_pos: DVec3) {
    let result = search::query(&state.query, &state.waypoints, state.sort_mode, player_pos);
    let km_threshold = state.options.distance_km_threshold;

    state.entries = result
        .into_iter()
        .map(|waypoint| WaypointListEntry::new(waypoint, player_pos, km_threshold))
        .collect();
}
