//! Application State: zentrale Datenhaltung der Session.

use super::CommandLog;
use crate::core::Graph;
use crate::engine::ShortestPathEngine;
use crate::shared::EditorOptions;

/// Aktueller Interaktionsmodus; genau einer ist aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Editieren: Linksklick platziert Nodes, Rechtsklick verbindet sie
    #[default]
    Editing,
    /// Pfadmodus: wartet auf Klick auf den Startknoten
    AwaitingSource,
    /// Pfadmodus: wartet auf Klick auf den Zielknoten
    AwaitingTarget,
    /// Ein Lauf ist aktiv; Graph-Mutationen sind gesperrt
    RunningAlgorithm,
}

/// Zustand der Kanten-Erstellung im Editiermodus.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorToolState {
    /// Quell-Node einer angefangenen Kante (wartet auf den Ziel-Klick)
    pub pending_edge_source: Option<usize>,
}

/// Auswahlzustand des Pfadmodus.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSelectionState {
    /// Gewählter Startknoten
    pub source_node: Option<usize>,
    /// Gewählter Zielknoten
    pub target_node: Option<usize>,
}

/// Hauptzustand der Anwendung.
///
/// Das eine, explizit übergebene Session-Aggregat: Graph, Modus,
/// Werkzeug- und Auswahlzustand, Engine und Optionen. Keine globalen
/// Variablen.
#[derive(Default)]
pub struct AppState {
    /// Der editierbare Graph
    pub graph: Graph,
    /// Aktueller Interaktionsmodus
    pub mode: InteractionMode,
    /// Zustand der Kanten-Erstellung
    pub editor: EditorToolState,
    /// Auswahlzustand des Pfadmodus
    pub path_selection: PathSelectionState,
    /// Pfadsuche mit höchstens einem ausstehenden Lauf
    pub engine: ShortestPathEngine,
    /// Gerade geprüfte Kante des laufenden Algorithmus (Animation)
    pub candidate_edge: Option<(usize, usize)>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Klick-Radius, Pacing)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State im Editiermodus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt die Anzahl der Nodes zurück (für Statusanzeigen).
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Gibt die Anzahl der Kanten zurück (für Statusanzeigen).
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Setzt Werkzeug- und Auswahlzustand zurück (Modus unverändert).
    pub fn reset_selection(&mut self) {
        self.editor.pending_edge_source = None;
        self.path_selection = PathSelectionState::default();
        self.candidate_edge = None;
    }
}
