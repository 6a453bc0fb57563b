//! Use-Case: Neuen Node an einer normierten Position hinzufügen.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::{node_label, CoreError};
use glam::Vec2;

/// Fügt einen neuen Node an der gegebenen Position hinzu.
///
/// Während eines aktiven Laufs sind Graph-Mutationen gesperrt.
pub fn add_node_at_position(state: &mut AppState, world_pos: Vec2) -> Result<(), CoreError> {
    if state.mode == InteractionMode::RunningAlgorithm {
        return Err(CoreError::InvalidState("Graph-Mutation während eines Laufs"));
    }

    let id = state.graph.add_node(world_pos);
    log::info!(
        "Node {} ({}) an Position ({:.2}, {:.2}) hinzugefügt",
        id,
        node_label(id),
        world_pos.x,
        world_pos.y
    );

    Ok(())
}
