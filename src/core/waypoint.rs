//! Repräsentiert einen Wegpunkt auf der Weltkarte.

use glam::DVec3;

/// Standard-Icon wenn eine Quelle keines liefert.
pub const DEFAULT_ICON: &str = "circle";
/// Standard-Farbton (neutrales Grau, RGBA) wenn eine Quelle keinen liefert.
pub const DEFAULT_COLOR: [u8; 4] = [200, 200, 200, 255];

/// Ein Wegpunkt auf der Weltkarte.
///
/// Titel und Notiz sind beide optional; damit ein Suchtreffer sinnvoll
/// angezeigt werden kann muss mindestens eines von beiden gefüllt sein.
/// Die Position ist immer vorhanden — die Distanz-Sortierung verlässt
/// sich darauf.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Anzeigename (optional)
    pub title: Option<String>,
    /// Freitext-Notiz, zweites Suchfeld (optional)
    pub text: Option<String>,
    /// Weltposition; für Suche/Sortierung zählen nur X und Z
    pub position: DVec3,
    /// Symbolischer Icon-Code
    pub icon: String,
    /// Anzeige-Farbton (RGBA)
    pub color: [u8; 4],
}

impl Waypoint {
    /// Erstellt einen Wegpunkt mit Standard-Icon und -Farbe.
    pub fn new(title: Option<String>, text: Option<String>, position: DVec3) -> Self {
        Self {
            title,
            text,
            position,
            icon: DEFAULT_ICON.to_string(),
            color: DEFAULT_COLOR,
        }
    }
}
