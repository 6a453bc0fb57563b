//! Handler für Pfadmodus und schrittweise Algorithmus-Ausführung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CoreError;
use glam::Vec2;

/// Aktiviert den Pfadmodus (wartet auf den Startknoten).
pub fn enter_path_selection(state: &mut AppState) {
    use_cases::pathfinding::enter_path_selection(state);
}

/// Wählt den Startknoten der Pfadsuche.
pub fn select_source(state: &mut AppState, world_pos: Vec2, max_distance: f32) {
    use_cases::pathfinding::select_source_node(state, world_pos, max_distance);
}

/// Wählt den Zielknoten und startet den Lauf.
pub fn select_target_and_run(
    state: &mut AppState,
    world_pos: Vec2,
    max_distance: f32,
) -> Result<(), CoreError> {
    use_cases::pathfinding::select_target_node_and_run(state, world_pos, max_distance)
}

/// Verarbeitet genau ein Ereignis des aktiven Laufs.
pub fn step(state: &mut AppState) {
    use_cases::pathfinding::step_algorithm(state);
}
