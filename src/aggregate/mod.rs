//! Zusammenführung von Wegpunkten aus mehreren Quellen.
//!
//! Die autoritative Liste gehört dem Host; optionale Kompatibilitäts-
//! Provider (andere Mods) steuern zusätzliche Wegpunkte über die
//! [`WaypointProvider`]-Capability bei. Ein fehlschlagender Provider
//! darf den Merge nie scheitern lassen.

pub mod foreign;

use glam::DVec3;
use indexmap::IndexMap;
use thiserror::Error;

use crate::core::{Waypoint, DEFAULT_COLOR, DEFAULT_ICON};

/// Fehlerklassen einer Provider-Abfrage.
///
/// Alle drei werden im Aggregator lokal behandelt, keiner erreicht den
/// Aufrufer.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Optionaler Provider ist nicht installiert — erwartet, kein Warnlog
    #[error("Provider nicht installiert")]
    Unavailable,
    /// Daten des Providers konnten nicht interpretiert werden
    #[error("Wegpunkt-Daten in unerwartetem Format: {0}")]
    ShapeMismatch(String),
    /// Die Abfrage selbst ist fehlgeschlagen
    #[error("Provider-Abfrage fehlgeschlagen: {0}")]
    Internal(String),
}

/// Teilweise befüllter Wegpunkt, wie ihn ein Provider liefern darf.
///
/// Nur die Position ist Pflicht; fehlende Anzeige-Felder füllt der
/// Aggregator beim Merge mit den Standardwerten auf.
#[derive(Debug, Clone)]
pub struct ProviderWaypoint {
    /// Anzeigename (optional)
    pub title: Option<String>,
    /// Freitext-Notiz (optional)
    pub text: Option<String>,
    /// Weltposition
    pub position: DVec3,
    /// Icon-Code, sofern der Provider einen liefert
    pub icon: Option<String>,
    /// Farbton (RGBA), sofern der Provider einen liefert
    pub color: Option<[u8; 4]>,
}

impl ProviderWaypoint {
    /// Erstellt einen Provider-Wegpunkt, der nur seine Position kennt.
    pub fn new(position: DVec3) -> Self {
        Self {
            title: None,
            text: None,
            position,
            icon: None,
            color: None,
        }
    }

    /// Wandelt in einen vollständigen Wegpunkt um (Icon `"circle"`,
    /// Farbe neutrales Grau als Fallback).
    pub fn into_waypoint(self) -> Waypoint {
        Waypoint {
            title: self.title,
            text: self.text,
            position: self.position,
            icon: self.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
            color: self.color.unwrap_or(DEFAULT_COLOR),
        }
    }
}

/// Capability eines externen Wegpunkt-Lieferanten.
///
/// Die Integrationsschicht implementiert das einmal pro bekannter
/// Fremdquelle. Die Abfrage ist synchron und ohne Timeout; ein
/// netzwerkgebundener oder langsamer Provider braucht einen eigenen
/// Wrapper um `try_fetch`.
pub trait WaypointProvider {
    /// Liefert die aktuellen Wegpunkte des Providers.
    fn try_fetch(&self) -> Result<Vec<ProviderWaypoint>, ProviderError>;
}

/// Führt die Host-Liste mit den Beiträgen aller registrierten Provider
/// zusammen.
#[derive(Default)]
pub struct WaypointAggregator {
    /// Provider in Registrierungs-Reihenfolge, Schlüssel = stabiler Name
    providers: IndexMap<String, Box<dyn WaypointProvider>>,
}

impl WaypointAggregator {
    /// Erstellt einen Aggregator ohne Provider.
    pub fn new() -> Self {
        Self {
            providers: IndexMap::new(),
        }
    }

    /// Registriert einen Provider unter einem stabilen Namen.
    ///
    /// Die Registrierungs-Reihenfolge bestimmt die Reihenfolge der
    /// Beiträge im Merge-Ergebnis.
    pub fn register(&mut self, name: impl Into<String>, provider: Box<dyn WaypointProvider>) {
        let name = name.into();
        if self.providers.insert(name.clone(), provider).is_some() {
            log::warn!("Provider '{}' erneut registriert, alter Eintrag ersetzt", name);
        }
    }

    /// Anzahl registrierter Provider.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Verkettet die Host-Liste mit den Beiträgen aller Provider.
    ///
    /// Reihenfolge: `primary`, dann jeder Provider in Registrierungs-
    /// Reihenfolge. Keine Deduplizierung — identische Wegpunkte aus
    /// mehreren Quellen bleiben erhalten. Ein fehlschlagender Provider
    /// trägt nichts bei und erzeugt genau einen Log-Eintrag; der Merge
    /// liefert immer ein Ergebnis.
    pub fn merge(&self, primary: &[Waypoint]) -> Vec<Waypoint> {
        let mut merged = primary.to_vec();

        for (name, provider) in &self.providers {
            match provider.try_fetch() {
                Ok(contribution) => {
                    merged.extend(
                        contribution
                            .into_iter()
                            .map(ProviderWaypoint::into_waypoint),
                    );
                }
                Err(ProviderError::Unavailable) => {
                    log::debug!("Provider '{}' nicht installiert", name);
                }
                Err(e) => {
                    log::warn!("Wegpunkte von Provider '{}' nicht lesbar: {}", name, e);
                }
            }
        }

        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(Vec<ProviderWaypoint>);

    impl WaypointProvider for FixedProvider {
        fn try_fetch(&self) -> Result<Vec<ProviderWaypoint>, ProviderError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenProvider;

    impl WaypointProvider for BrokenProvider {
        fn try_fetch(&self) -> Result<Vec<ProviderWaypoint>, ProviderError> {
            Err(ProviderError::Internal("kaputt".to_string()))
        }
    }

    fn titled(title: &str, x: f64) -> ProviderWaypoint {
        ProviderWaypoint {
            title: Some(title.to_string()),
            ..ProviderWaypoint::new(DVec3::new(x, 0.0, 0.0))
        }
    }

    fn host_wp(title: &str, x: f64) -> Waypoint {
        Waypoint::new(Some(title.to_string()), None, DVec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn merge_haengt_provider_in_registrierungs_reihenfolge_an() {
        let mut aggregator = WaypointAggregator::new();
        aggregator.register("eins", Box::new(FixedProvider(vec![titled("P1", 1.0)])));
        aggregator.register("zwei", Box::new(FixedProvider(vec![titled("P2", 2.0)])));

        let merged = aggregator.merge(&[host_wp("Host", 0.0)]);

        let titles: Vec<_> = merged.iter().filter_map(|wp| wp.title.as_deref()).collect();
        assert_eq!(titles, vec!["Host", "P1", "P2"]);
    }

    #[test]
    fn merge_dedupliziert_nicht() {
        let mut aggregator = WaypointAggregator::new();
        aggregator.register("spiegel", Box::new(FixedProvider(vec![titled("A", 0.0)])));

        let merged = aggregator.merge(&[host_wp("A", 0.0)]);

        // Duplikate über Quellen hinweg bleiben erhalten
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, merged[1].title);
    }

    #[test]
    fn kaputter_provider_traegt_nichts_bei() {
        let mut mit_defekt = WaypointAggregator::new();
        mit_defekt.register("ok", Box::new(FixedProvider(vec![titled("P", 1.0)])));
        mit_defekt.register("defekt", Box::new(BrokenProvider));

        let mut ohne_defekt = WaypointAggregator::new();
        ohne_defekt.register("ok", Box::new(FixedProvider(vec![titled("P", 1.0)])));

        let primary = [host_wp("Host", 0.0)];
        assert_eq!(mit_defekt.merge(&primary), ohne_defekt.merge(&primary));
    }

    #[test]
    fn nicht_installierter_provider_ist_kein_fehler() {
        struct AbsentProvider;
        impl WaypointProvider for AbsentProvider {
            fn try_fetch(&self) -> Result<Vec<ProviderWaypoint>, ProviderError> {
                Err(ProviderError::Unavailable)
            }
        }

        let mut aggregator = WaypointAggregator::new();
        aggregator.register("fehlt", Box::new(AbsentProvider));

        assert_eq!(aggregator.merge(&[host_wp("Host", 0.0)]).len(), 1);
    }

    #[test]
    fn merge_fuellt_fehlende_felder_mit_defaults() {
        let mut aggregator = WaypointAggregator::new();
        aggregator.register(
            "teilweise",
            Box::new(FixedProvider(vec![ProviderWaypoint::new(DVec3::new(
                5.0, 0.0, 5.0,
            ))])),
        );

        let merged = aggregator.merge(&[]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].icon, DEFAULT_ICON);
        assert_eq!(merged[0].color, DEFAULT_COLOR);
    }

    #[test]
    fn leere_host_liste_ist_erlaubt() {
        let aggregator = WaypointAggregator::new();

        assert!(aggregator.merge(&[]).is_empty());
    }
}
