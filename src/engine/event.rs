//! Beobachtbare Ereignisse der schrittweisen Pfadsuche.

/// Ein einzelner, beobachtbarer Schritt eines Dijkstra-Laufs.
///
/// Die Sequenz ist endlich, nicht neustartbar und deterministisch:
/// identische Graph- und Start/Ziel-Eingaben erzeugen exakt dieselbe
/// Ereignisfolge (stabile Tie-Breaks über Node-IDs und
/// Kanten-Einfügereihenfolge).
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmEvent {
    /// Eine ausgehende Kante verbessert die bekannte Distanz (vor dem
    /// Update). Kanten ohne Verbesserung erzeugen kein Ereignis.
    RelaxationAttempted {
        from: usize,
        to: usize,
        edge_weight: f32,
    },
    /// dist/prev wurden aktualisiert und der Node erneut in die Frontier
    /// gelegt.
    RelaxationApplied {
        to: usize,
        new_distance: f32,
        predecessor: usize,
    },
    /// Node wurde aus der Frontier genommen und finalisiert.
    /// Wird genau einmal pro Node gesendet; verspätete (stale) Pops
    /// desselben Nodes erzeugen kein Ereignis.
    NodeFinalized { node: usize },
    /// Abschluss des Laufs: der rekonstruierte Pfad vom Start zum Ziel.
    /// Leer, wenn das Ziel unerreichbar ist oder Start == Ziel.
    PathReconstructed { edges: Vec<(usize, usize)> },
}

/// Endergebnis eines abgeschlossenen Laufs.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Kanten des kürzesten Pfads, in Reihenfolge vom Start zum Ziel
    pub edges: Vec<(usize, usize)>,
    /// Gesamtdistanz zum Ziel (`f32::INFINITY` wenn unerreichbar)
    pub distance: f32,
}

impl PathResult {
    /// Gibt zurück, ob das Ziel erreichbar war.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}
