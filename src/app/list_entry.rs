//! Anzeige-Daten eines Eintrags der gefilterten Wegpunkt-Liste.
//!
//! Rein berechnete Darstellungswerte — Texturen und SVG-Rasterung
//! übernimmt die Host-UI.

use glam::DVec3;

use crate::core::{format_distance, planar_distance, Waypoint};

/// Icon-Codes die der Host unter nummerierten Asset-Namen ablegt.
const RENAMED_ICON_CODES: [&str; 6] = ["circle", "turnip", "grain", "apple", "berries", "mushroom"];

/// Ein darstellbarer Eintrag der gefilterten Wegpunkt-Liste.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointListEntry {
    /// Der zugrunde liegende Wegpunkt
    pub waypoint: Waypoint,
    /// Anzeigename (Titel, sonst Notiz)
    pub label: String,
    /// Menschenlesbare Entfernung zum Spieler ("876 m" / "2.4 km")
    pub distance_text: String,
    /// Normalisierter Icon-Code für die Asset-Suche des Hosts
    pub icon_code: String,
}

impl WaypointListEntry {
    /// Berechnet die Darstellungswerte für einen Wegpunkt.
    pub fn new(waypoint: Waypoint, player_pos: DVec3, km_threshold: f64) -> Self {
        let label = waypoint
            .title
            .clone()
            .or_else(|| waypoint.text.clone())
            .unwrap_or_default();
        let distance_text =
            format_distance(planar_distance(player_pos, waypoint.position), km_threshold);
        let icon_code = normalize_icon_code(&waypoint.icon);

        Self {
            waypoint,
            label,
            distance_text,
            icon_code,
        }
    }
}

/// Bildet einen Icon-Code auf den nummerierten Asset-Namen des Hosts ab.
///
/// `circle → 0-circle`, `turnip → 01-turnip`, …; unbekannte Codes bleiben
/// unverändert, ein leerer Code fällt auf `0-circle` zurück.
pub fn normalize_icon_code(icon: &str) -> String {
    if icon.is_empty() {
        return "0-circle".to_string();
    }

    match RENAMED_ICON_CODES.iter().position(|&code| code == icon) {
        Some(0) => format!("0-{}", icon),
        Some(index) => format!("{:02}-{}", index, icon),
        None => icon.to_string(),
    }
}
