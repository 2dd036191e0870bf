//! Sortiermodi der Wegpunkt-Liste.

use serde::{Deserialize, Serialize};

/// Sortierung der gefilterten Wegpunkt-Liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Aufsteigend nach planarer Entfernung zum Spieler
    #[default]
    ByDistance,
    /// Aufsteigend nach Titel (ordinaler Stringvergleich)
    Alphabetical,
}

impl SortMode {
    /// Alle Modi in der Reihenfolge des Sortier-Dropdowns.
    pub fn all() -> [Self; 2] {
        [Self::ByDistance, Self::Alphabetical]
    }

    /// Anzeigename für das Sortier-Dropdown.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::ByDistance => "Nach Entfernung",
            Self::Alphabetical => "Alphabetisch",
        }
    }
}
