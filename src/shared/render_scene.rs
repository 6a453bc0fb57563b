//! Render-Szene als expliziter Übergabevertrag zwischen App und Presenter.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Presenter
//! (Fenster/Zeichnen, nicht Teil dieser Library) sie konsumiert.

use super::options::EditorOptions;
use crate::app::InteractionMode;
use crate::core::Graph;

/// Read-only Daten für einen Render-Frame.
///
/// Enthält den vollständigen Graph-Schnappschuss (geordnete Nodes mit
/// Flags, geordnete Kanten mit Gewichten, gemerkter kürzester Pfad)
/// sowie den Interaktions- und Animationszustand.
#[derive(Clone)]
pub struct RenderScene {
    /// Schnappschuss des Graphen
    pub graph: Graph,
    /// Aktueller Interaktionsmodus
    pub mode: InteractionMode,
    /// Gewählter Startknoten der Pfadsuche (Hervorhebung)
    pub source_node: Option<usize>,
    /// Gewählter Zielknoten der Pfadsuche (Hervorhebung)
    pub target_node: Option<usize>,
    /// Quell-Node einer angefangenen Kanten-Erstellung
    pub pending_edge_source: Option<usize>,
    /// Gerade geprüfte Kante des laufenden Algorithmus (Animation)
    pub candidate_edge: Option<(usize, usize)>,
    /// Laufzeit-Optionen (Klick-Radius, Pacing)
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob aktuell ein Lauf animiert wird.
    pub fn is_running(&self) -> bool {
        self.mode == InteractionMode::RunningAlgorithm
    }
}
