//! Handler für Graph-Editing: Nodes platzieren, Kanten erstellen, leeren.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CoreError;
use glam::Vec2;

/// Fügt einen neuen Node an der übergebenen Position hinzu.
pub fn add_node(state: &mut AppState, world_pos: Vec2) -> Result<(), CoreError> {
    use_cases::editing::add_node_at_position(state, world_pos)
}

/// Verarbeitet einen Pick für das Kanten-Werkzeug.
pub fn connect_tool_pick(
    state: &mut AppState,
    world_pos: Vec2,
    max_distance: f32,
) -> Result<(), CoreError> {
    use_cases::editing::connect_tool_pick_node(state, world_pos, max_distance)
}

/// Leert den Graphen vollständig und kehrt in den Editiermodus zurück.
pub fn clear_graph(state: &mut AppState) {
    use_cases::editing::clear_graph(state);
}
