//! Dijkstra Visual Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod engine;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InteractionMode, PointerButton,
};
pub use core::{edge_weight, node_label, CoreError, Edge, Graph, GraphNode};
pub use engine::{AlgorithmEvent, PathResult, PathRun, ShortestPathEngine};
pub use shared::{EditorOptions, RenderScene};
