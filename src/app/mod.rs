//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Interaktionsmodus
///
/// Dieses Modul verwaltet das Session-Aggregat: Graph, Modus,
/// Werkzeug- und Auswahlzustand sowie die Pfadsuche-Engine.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerButton};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorToolState, InteractionMode, PathSelectionState};
