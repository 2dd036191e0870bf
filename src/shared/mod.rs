//! Geteilte Laufzeit-Konfiguration.

pub mod options;

pub use options::SearchOptions;
