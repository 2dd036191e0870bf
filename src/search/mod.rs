//! Such- und Sortier-Engine über Wegpunkt-Listen.
//!
//! Reine Funktionen ohne eigenen Zustand: Query-Text, Sortiermodus und
//! Referenzposition hält der Aufrufer und übergibt sie pro Aufruf.

use glam::DVec3;

use crate::core::{planar_distance, SortMode, Waypoint};

/// Filtert Wegpunkte per Substring-Suche über Titel und Notiz.
///
/// Query und Felder werden locale-invariant kleingeschrieben verglichen;
/// leere Felder matchen nie. Den Leer-Query-Kurzschluss ("kein Filter")
/// übernimmt der Aufrufer, siehe [`query`].
pub fn matches(query: &str, waypoints: &[Waypoint]) -> Vec<Waypoint> {
    let needle = query.to_lowercase();

    waypoints
        .iter()
        .filter(|wp| {
            field_contains(wp.title.as_deref(), &needle)
                || field_contains(wp.text.as_deref(), &needle)
        })
        .cloned()
        .collect()
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    match field {
        Some(value) if !value.is_empty() => value.to_lowercase().contains(needle),
        _ => false,
    }
}

/// Sortiert Wegpunkte nach dem gewählten Modus.
///
/// Die Sortierung ist stabil: gleiche Schlüssel behalten ihre
/// Eingabe-Reihenfolge. Fehlende Titel sortieren als Leerstring nach vorn.
pub fn sorted(mut waypoints: Vec<Waypoint>, mode: SortMode, reference: DVec3) -> Vec<Waypoint> {
    match mode {
        SortMode::Alphabetical => {
            waypoints.sort_by(|a, b| {
                a.title
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.title.as_deref().unwrap_or(""))
            });
        }
        SortMode::ByDistance => {
            waypoints.sort_by(|a, b| {
                planar_distance(reference, a.position)
                    .total_cmp(&planar_distance(reference, b.position))
            });
        }
    }

    waypoints
}

/// Filtert und sortiert in einem Schritt.
///
/// Eine leere oder nur aus Whitespace bestehende Query bedeutet "kein
/// Filter": die komplette Liste wird nur sortiert. Eine Query ohne
/// Treffer liefert eine leere Liste, keinen Fehler.
pub fn query(
    text: &str,
    waypoints: &[Waypoint],
    mode: SortMode,
    reference: DVec3,
) -> Vec<Waypoint> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        sorted(waypoints.to_vec(), mode, reference)
    } else {
        sorted(matches(trimmed, waypoints), mode, reference)
    }
}
