//! Repräsentiert einen per Klick platzierten Punkt des Graphen.

use glam::Vec2;

/// Ein Knoten des Graphen.
///
/// Die `id` ist zugleich der Index im Knoten-Vektor des Graphen:
/// IDs sind dicht (`0..n-1`) in Erstellungsreihenfolge und werden nie
/// wiederverwendet. Einzelne Nodes werden nicht gelöscht, nur der ganze
/// Graph kann geleert werden.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// Dichte Node-ID (== Index im Knoten-Vektor)
    pub id: usize,
    /// Position in normierten Koordinaten ([-1,1] x [-1,1], Ursprung Mitte)
    pub position: Vec2,
    /// Vom laufenden Algorithmus finalisiert (transienter Präsentationszustand)
    pub visited: bool,
    /// Während einer Relaxation hervorgehoben (transienter Präsentationszustand)
    pub highlighted: bool,
}

impl GraphNode {
    /// Erstellt einen neuen, unbesuchten Node.
    pub fn new(id: usize, position: Vec2) -> Self {
        Self {
            id,
            position,
            visited: false,
            highlighted: false,
        }
    }
}

/// Wandelt eine Node-ID in ihr Anzeige-Label um (A, B, ..., Z, AA, AB, ...).
pub fn node_label(id: usize) -> String {
    let mut label = String::new();
    let mut rest = id;
    loop {
        label.insert(0, (b'A' + (rest % 26) as u8) as char);
        rest /= 26;
        if rest == 0 {
            break;
        }
        rest -= 1;
    }
    label
}
