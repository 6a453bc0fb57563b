//! Fehler-Taxonomie der Core- und Engine-Operationen.

use thiserror::Error;

/// Lokale, behebbare Fehlerbedingungen von Graph und Pfadsuche.
///
/// Keine davon ist fatal: fehlgeformte Interaktionen werden von der
/// App-Schicht verworfen statt an den Benutzer propagiert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Eine Kante referenziert eine nicht existierende Node-ID.
    #[error("Node {0} existiert nicht")]
    InvalidNode(usize),
    /// Pfadsuche wurde mit ungültigem Start oder Ziel aufgerufen.
    #[error("unbekannter Node {0} für die Pfadsuche")]
    UnknownNode(usize),
    /// Operation ist im aktuellen Zustand nicht erlaubt.
    #[error("im aktuellen Zustand nicht erlaubt: {0}")]
    InvalidState(&'static str),
}
