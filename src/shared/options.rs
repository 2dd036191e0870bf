//! Laufzeit-Optionen des Such-Panels.
//!
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::SortMode;

/// Refresh-Kadenz der aggregierten Wegpunkt-Liste in Millisekunden.
pub const REFRESH_INTERVAL_MS: u64 = 2000;
/// Ab dieser Distanz (Meter) wird die Entfernung in Kilometern angezeigt.
pub const DISTANCE_KM_THRESHOLD: f64 = 2000.0;

/// Alle zur Laufzeit änderbaren Optionen des Such-Panels.
/// Wird von der Integrationsschicht als TOML neben der Host-Config gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Sortiermodus beim Öffnen des Panels
    #[serde(default)]
    pub default_sort_mode: SortMode,
    /// Refresh-Kadenz der aggregierten Liste in Millisekunden
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    /// Ab dieser Distanz (Meter) wird in Kilometern angezeigt
    #[serde(default = "default_distance_km_threshold")]
    pub distance_km_threshold: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            default_sort_mode: SortMode::ByDistance,
            refresh_interval_ms: REFRESH_INTERVAL_MS,
            distance_km_threshold: DISTANCE_KM_THRESHOLD,
        }
    }
}

/// Serde-Default für `refresh_interval_ms` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_refresh_interval_ms() -> u64 {
    REFRESH_INTERVAL_MS
}

/// Serde-Default für `distance_km_threshold` (Abwärtskompatibilität).
fn default_distance_km_threshold() -> f64 {
    DISTANCE_KM_THRESHOLD
}

impl SearchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
