//! Use-Cases für Pfadmodus und schrittweise Ausführung.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::CoreError;
use crate::engine::AlgorithmEvent;
use glam::Vec2;

/// Wechselt in den Pfadmodus (wartet auf den Startknoten).
///
/// Setzt vorherige Auswahlen und eine angefangene Kanten-Erstellung
/// zurück.
pub fn enter_path_selection(state: &mut AppState) {
    state.reset_selection();
    state.mode = InteractionMode::AwaitingSource;
    log::info!("Pfadmodus aktiviert: Startknoten anklicken, danach Zielknoten");
}

/// Wählt den Startknoten; Klicks ins Leere bleiben ohne Wirkung.
pub fn select_source_node(state: &mut AppState, world_pos: Vec2, max_distance: f32) {
    let Some(node_id) = state.graph.nearest_node(world_pos, max_distance) else {
        log::debug!("Pfadmodus: kein Node in Klick-Reichweite");
        return;
    };

    state.path_selection.source_node = Some(node_id);
    state.mode = InteractionMode::AwaitingTarget;
    log::info!("Startknoten {} gewählt", node_id);
}

/// Wählt den Zielknoten und startet den Lauf.
pub fn select_target_node_and_run(
    state: &mut AppState,
    world_pos: Vec2,
    max_distance: f32,
) -> Result<(), CoreError> {
    let Some(node_id) = state.graph.nearest_node(world_pos, max_distance) else {
        log::debug!("Pfadmodus: kein Node in Klick-Reichweite");
        return Ok(());
    };
    let source = state
        .path_selection
        .source_node
        .ok_or(CoreError::InvalidState("kein Startknoten gewählt"))?;

    state.path_selection.target_node = Some(node_id);

    // Transiente Flags und Pfad des vorherigen Laufs überschreiben
    state.graph.reset_run_flags();
    state.graph.clear_shortest_path();
    state.candidate_edge = None;

    state.engine.start(&state.graph, source, node_id)?;
    state.mode = InteractionMode::RunningAlgorithm;
    log::info!("Zielknoten {} gewählt, Lauf gestartet", node_id);

    Ok(())
}

/// Verarbeitet genau ein Ereignis des aktiven Laufs.
///
/// Jedes Ereignis ist ein Suspensionspunkt: der Presenter rendert den
/// Zwischenzustand und bestimmt das Tempo des nächsten Schritts selbst.
pub fn step_algorithm(state: &mut AppState) {
    let Some(event) = state.engine.next_event() else {
        // Kein aktiver Lauf mehr: zurück in den Editiermodus
        state.mode = InteractionMode::Editing;
        return;
    };

    match event {
        AlgorithmEvent::NodeFinalized { node } => {
            state.graph.mark_visited(node);
            state.graph.clear_highlights();
            state.candidate_edge = None;
            log::debug!("Node {} finalisiert", node);
        }
        AlgorithmEvent::RelaxationAttempted {
            from,
            to,
            edge_weight,
        } => {
            state.graph.clear_highlights();
            state.candidate_edge = Some((from, to));
            log::debug!(
                "Relaxation {} -> {} (Gewicht {}) wird geprüft",
                from,
                to,
                edge_weight
            );
        }
        AlgorithmEvent::RelaxationApplied {
            to,
            new_distance,
            predecessor,
        } => {
            // Die Kandidaten-Kante des vorausgegangenen Attempted-Ereignisses
            // bleibt für diesen Schritt sichtbar
            state.graph.set_highlighted_only(to);
            log::debug!(
                "Distanz zu {} verbessert: {} (über {})",
                to,
                new_distance,
                predecessor
            );
        }
        AlgorithmEvent::PathReconstructed { edges } => {
            state.graph.clear_highlights();
            state.candidate_edge = None;
            log::info!("Pfad rekonstruiert: {} Kanten", edges.len());
            state.graph.set_shortest_path(edges);
            state.mode = InteractionMode::Editing;
        }
    }
}
