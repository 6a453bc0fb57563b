//! Schrittweiser Dijkstra über einer Min-Heap-Frontier mit Lazy Deletion.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use super::{AlgorithmEvent, PathResult};
use crate::core::{CoreError, Edge, Graph};

/// Eintrag der Prioritäts-Frontier: (Tentativdistanz, Node-ID).
///
/// Gleichstände lösen sich über die aufsteigende Node-ID auf, damit die
/// Ereignis-Sequenz reproduzierbar bleibt.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    distance: f32,
    node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Ein einzelner Dijkstra-Lauf als lazy Ereignis-Iterator.
///
/// Der Lauf hält einen Schnappschuss der Kantenliste und ist damit
/// strukturell von Graph-Mutationen entkoppelt. Die Frontier wird
/// vollständig geleert, bevor der Pfad rekonstruiert wird; ein früher
/// Abbruch beim Finalisieren des Ziels würde die Ereignis-Sequenz
/// verändern und ist bewusst nicht implementiert.
///
/// Vorbedingung: Kantengewichte >= 0. Der Graph erzeugt keine negativen
/// Gewichte (Distanz-basiert); als allgemeine Bibliothek ist das eine
/// dokumentierte Eingabe-Vorbedingung, kein geprüfter Fall.
pub struct PathRun {
    target: usize,
    dist: Vec<f32>,
    prev: Vec<Option<usize>>,
    settled: Vec<bool>,
    frontier: BinaryHeap<Reverse<FrontierEntry>>,
    edges: Vec<Edge>,
    pending: VecDeque<AlgorithmEvent>,
    result: Option<PathResult>,
}

impl PathRun {
    /// Startet einen Lauf von `source` nach `target`.
    pub fn start(graph: &Graph, source: usize, target: usize) -> Result<Self, CoreError> {
        let node_count = graph.node_count();
        if source >= node_count {
            return Err(CoreError::UnknownNode(source));
        }
        if target >= node_count {
            return Err(CoreError::UnknownNode(target));
        }

        let mut dist = vec![f32::INFINITY; node_count];
        dist[source] = 0.0;
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(FrontierEntry {
            distance: 0.0,
            node: source,
        }));

        Ok(Self {
            target,
            dist,
            prev: vec![None; node_count],
            settled: vec![false; node_count],
            frontier,
            edges: graph.edges().to_vec(),
            pending: VecDeque::new(),
            result: None,
        })
    }

    /// Gibt das Endergebnis zurück, sobald der Lauf abgeschlossen ist.
    pub fn result(&self) -> Option<&PathResult> {
        self.result.as_ref()
    }

    /// Verarbeitet den nächsten Frontier-Eintrag oder schließt den Lauf ab.
    fn advance(&mut self) {
        while let Some(Reverse(entry)) = self.frontier.pop() {
            let current = entry.node;
            // Stale Pop eines bereits finalisierten Nodes: stillschweigend
            // überspringen (Lazy Deletion)
            if self.settled[current] {
                continue;
            }
            self.settled[current] = true;
            self.pending
                .push_back(AlgorithmEvent::NodeFinalized { node: current });

            let base = self.dist[current];
            for edge in self.edges.iter().filter(|edge| edge.from == current) {
                let candidate = base + edge.weight;
                if candidate < self.dist[edge.to] {
                    self.pending.push_back(AlgorithmEvent::RelaxationAttempted {
                        from: current,
                        to: edge.to,
                        edge_weight: edge.weight,
                    });
                    self.dist[edge.to] = candidate;
                    self.prev[edge.to] = Some(current);
                    self.frontier.push(Reverse(FrontierEntry {
                        distance: candidate,
                        node: edge.to,
                    }));
                    self.pending.push_back(AlgorithmEvent::RelaxationApplied {
                        to: edge.to,
                        new_distance: candidate,
                        predecessor: current,
                    });
                }
            }
            return;
        }

        // Frontier leer: Pfad rückwärts über prev rekonstruieren
        let edges = self.reconstruct_path();
        self.pending.push_back(AlgorithmEvent::PathReconstructed {
            edges: edges.clone(),
        });
        self.result = Some(PathResult {
            edges,
            distance: self.dist[self.target],
        });
    }

    fn reconstruct_path(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        let mut current = self.target;
        while let Some(predecessor) = self.prev[current] {
            edges.push((predecessor, current));
            current = predecessor;
        }
        edges.reverse();
        edges
    }
}

impl Iterator for PathRun {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<AlgorithmEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.result.is_some() {
                return None;
            }
            self.advance();
        }
    }
}

/// Verwaltet höchstens einen ausstehenden Lauf.
///
/// `start` schlägt fehl, solange die Ereignis-Sequenz eines vorherigen
/// Laufs nicht vollständig konsumiert wurde.
#[derive(Default)]
pub struct ShortestPathEngine {
    active_run: Option<PathRun>,
    last_result: Option<PathResult>,
}

impl ShortestPathEngine {
    /// Erstellt eine Engine ohne aktiven Lauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob ein Lauf aussteht.
    pub fn is_running(&self) -> bool {
        self.active_run.is_some()
    }

    /// Startet einen neuen Lauf von `source` nach `target`.
    pub fn start(&mut self, graph: &Graph, source: usize, target: usize) -> Result<(), CoreError> {
        if self.active_run.is_some() {
            return Err(CoreError::InvalidState("es steht bereits ein Lauf aus"));
        }
        self.active_run = Some(PathRun::start(graph, source, target)?);
        self.last_result = None;
        log::info!("Pfadsuche gestartet: {} -> {}", source, target);
        Ok(())
    }

    /// Liefert das nächste Ereignis des aktiven Laufs.
    ///
    /// Nach `PathReconstructed` ist der Lauf abgeschlossen; sein Ergebnis
    /// bleibt über `last_result` abrufbar.
    pub fn next_event(&mut self) -> Option<AlgorithmEvent> {
        let run = self.active_run.as_mut()?;
        match run.next() {
            Some(event) => {
                if matches!(event, AlgorithmEvent::PathReconstructed { .. }) {
                    self.last_result = self.active_run.take().and_then(|run| run.result);
                }
                Some(event)
            }
            None => {
                self.active_run = None;
                None
            }
        }
    }

    /// Bricht einen aktiven Lauf zwischen zwei Ereignissen ab
    /// (kooperative Cancellation, z.B. beim Leeren des Graphen).
    pub fn abort(&mut self) {
        if self.active_run.take().is_some() {
            log::info!("Pfadsuche abgebrochen");
        }
    }

    /// Ergebnis des zuletzt abgeschlossenen Laufs.
    pub fn last_result(&self) -> Option<&PathResult> {
        self.last_result.as_ref()
    }
}

#[cfg(test)]
mod tests;
