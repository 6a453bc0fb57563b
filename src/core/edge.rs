//! Repräsentiert eine gerichtete, gewichtete Kante zwischen zwei Nodes.

use glam::Vec2;

/// Skalierungsfaktor für Kantengewichte (Distanz x 100, gerundet).
///
/// Ergibt anzeigefreundliche, ganzzahlige Gewichte statt roher
/// Distanzwerte im normierten Koordinatenraum.
pub const EDGE_WEIGHT_SCALE: f32 = 100.0;

/// Eine gerichtete Kante zwischen zwei Nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Start-Node-ID
    pub from: usize,
    /// Ziel-Node-ID
    pub to: usize,
    /// Ganzzahliges Gewicht (als f32 für einheitliche Distanz-Arithmetik)
    pub weight: f32,
}

impl Edge {
    /// Erstellt eine neue Kante; das Gewicht ergibt sich aus den
    /// Node-Positionen zum Erstellungszeitpunkt und ändert sich danach nicht.
    pub fn new(from: usize, to: usize, start_pos: Vec2, end_pos: Vec2) -> Self {
        Self {
            from,
            to,
            weight: edge_weight(start_pos, end_pos),
        }
    }
}

/// Berechnet das Kantengewicht: Euklidische Distanz x 100, auf ganze Zahl gerundet.
pub fn edge_weight(start_pos: Vec2, end_pos: Vec2) -> f32 {
    (start_pos.distance(end_pos) * EDGE_WEIGHT_SCALE).round()
}
