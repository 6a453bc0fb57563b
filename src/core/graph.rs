//! Die zentrale Graph-Datenstruktur mit Nodes und gerichteten Kanten.

use super::{CoreError, Edge, GraphNode};
use glam::Vec2;

/// Container für den gesamten editierbaren Graphen.
///
/// Invariante: Node-IDs sind dichte Indizes `0..n-1` in
/// Erstellungsreihenfolge. Kanten sind append-only; Parallelkanten und
/// Self-Loops werden nicht validiert (Self-Loops haben Gewicht 0 und
/// relaxieren nie).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
    /// Kanten des zuletzt rekonstruierten kürzesten Pfads (für die Darstellung)
    shortest_path: Vec<(usize, usize)>,
}

impl Graph {
    /// Erstellt einen neuen, leeren Graphen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Node hinzu; die neue ID ist die bisherige Knotenanzahl.
    pub fn add_node(&mut self, position: Vec2) -> usize {
        let id = self.nodes.len();
        self.nodes.push(GraphNode::new(id, position));
        id
    }

    /// Fügt eine gerichtete Kante hinzu und gibt ihren Index zurück.
    ///
    /// Das Gewicht ergibt sich aus den aktuellen Node-Positionen.
    /// Duplikate werden nicht abgewiesen; Self-Loops sind degeneriert,
    /// aber zulässig.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<usize, CoreError> {
        let start_pos = self.node(from).ok_or(CoreError::InvalidNode(from))?.position;
        let end_pos = self.node(to).ok_or(CoreError::InvalidNode(to))?.position;
        if from == to {
            log::warn!("Degenerierte Self-Loop-Kante an Node {}", from);
        }
        let index = self.edges.len();
        self.edges.push(Edge::new(from, to, start_pos, end_pos));
        Ok(index)
    }

    /// Setzt den Graphen vollständig zurück (Nodes, Kanten, gemerkter Pfad).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.shortest_path.clear();
    }

    /// Gibt die Anzahl der Nodes zurück.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Kanten zurück.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Liefert einen Node per ID.
    pub fn node(&self, id: usize) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Alle Nodes in Erstellungsreihenfolge (read-only).
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Alle Kanten in Einfügereihenfolge (read-only).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterator über alle ausgehenden Kanten eines Nodes.
    ///
    /// Die Reihenfolge ist die Einfügereihenfolge der Kanten; sie bestimmt
    /// die Prüfreihenfolge der Engine und muss stabil bleiben.
    pub fn edges_from(&self, node: usize) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(move |(_, edge)| edge.from == node)
    }

    /// Findet den nächstgelegenen Node strikt unterhalb `max_distance`.
    ///
    /// Linearer Scan über alle Nodes; bei exakt gleicher Distanz gewinnt
    /// die niedrigste ID (zuerst gefundener Treffer). Diese Policy ist
    /// Teil des deterministischen Verhaltens und darf nicht durch einen
    /// räumlichen Index ersetzt werden.
    pub fn nearest_node(&self, query: Vec2, max_distance: f32) -> Option<usize> {
        let mut best = None;
        let mut best_distance = max_distance;
        for node in &self.nodes {
            let distance = node.position.distance(query);
            if distance < best_distance {
                best_distance = distance;
                best = Some(node.id);
            }
        }
        best
    }

    // ── Transienter Präsentationszustand ────────────────────────

    /// Markiert einen Node als besucht (finalisiert).
    pub fn mark_visited(&mut self, id: usize) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.visited = true;
        }
    }

    /// Hebt genau einen Node hervor und löscht alle anderen Hervorhebungen.
    pub fn set_highlighted_only(&mut self, id: usize) {
        for node in &mut self.nodes {
            node.highlighted = node.id == id;
        }
    }

    /// Löscht alle Hervorhebungen.
    pub fn clear_highlights(&mut self) {
        for node in &mut self.nodes {
            node.highlighted = false;
        }
    }

    /// Setzt die transienten Lauf-Flags aller Nodes zurück.
    /// Wird zu Beginn jedes Laufs aufgerufen; `clear()` entfernt die Nodes ganz.
    pub fn reset_run_flags(&mut self) {
        for node in &mut self.nodes {
            node.visited = false;
            node.highlighted = false;
        }
    }

    /// Hinterlegt den rekonstruierten kürzesten Pfad für die Darstellung.
    pub fn set_shortest_path(&mut self, edges: Vec<(usize, usize)>) {
        self.shortest_path = edges;
    }

    /// Löscht den gemerkten kürzesten Pfad.
    pub fn clear_shortest_path(&mut self) {
        self.shortest_path.clear();
    }

    /// Kanten des zuletzt rekonstruierten kürzesten Pfads.
    pub fn shortest_path(&self) -> &[(usize, usize)] {
        &self.shortest_path
    }
}
