//! Use-Case: Kanten über den Zwei-Klick-Ablauf erstellen.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::CoreError;
use glam::Vec2;

/// Kanten-Werkzeug: nächstgelegenen Node an der Klick-Position picken.
///
/// Der erste Treffer setzt den Quell-Node, der zweite Treffer erstellt
/// die Kante. Ein zweiter Klick auf denselben Node hebt die Auswahl auf.
/// Ein Klick ins Leere ist ein No-op; ein angefangener Quell-Node bleibt
/// dabei erhalten.
pub fn connect_tool_pick_node(
    state: &mut AppState,
    world_pos: Vec2,
    max_distance: f32,
) -> Result<(), CoreError> {
    if state.mode == InteractionMode::RunningAlgorithm {
        return Err(CoreError::InvalidState("Graph-Mutation während eines Laufs"));
    }

    let Some(node_id) = state.graph.nearest_node(world_pos, max_distance) else {
        log::debug!("Kanten-Werkzeug: kein Node in Klick-Reichweite");
        return Ok(());
    };

    match state.editor.pending_edge_source.take() {
        Some(source_id) if source_id == node_id => {
            log::info!("Kanten-Werkzeug: Auswahl von Node {} aufgehoben", source_id);
        }
        Some(source_id) => {
            let index = state.graph.add_edge(source_id, node_id)?;
            log::info!(
                "Kante {} -> {} (Gewicht {}) erstellt",
                source_id,
                node_id,
                state.graph.edges()[index].weight
            );
        }
        None => {
            state.editor.pending_edge_source = Some(node_id);
            log::info!("Kanten-Werkzeug: Startknoten {} gewählt", node_id);
        }
    }

    Ok(())
}
