//! Schrittweise Pfadsuche (Dijkstra) mit beobachtbarer Ereignis-Sequenz.
//!
//! Die Engine schläft nie selbst: das Tempo bestimmt der Konsument, der
//! die Ereignisse einzeln abruft. Jedes Ereignis ist ein Suspensionspunkt
//! der Animation.

pub mod dijkstra;
pub mod event;

pub use dijkstra::{PathRun, ShortestPathEngine};
pub use event::{AlgorithmEvent, PathResult};
