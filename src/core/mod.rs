//! Core-Domänentypen: Nodes, Kanten, Graph und Fehler-Taxonomie.

pub mod edge;
pub mod error;
/// Core-Datenmodell des Editors
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Graph: Container für alle Nodes und Kanten
/// - GraphNode: Einzelner Punkt mit Position und Lauf-Flags
/// - Edge: Gerichtete, gewichtete Kante zwischen zwei Nodes
pub mod graph;
pub mod node;

pub use edge::{edge_weight, Edge, EDGE_WEIGHT_SCALE};
pub use error::CoreError;
pub use graph::Graph;
pub use node::{node_label, GraphNode};
