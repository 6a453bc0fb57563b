//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        graph: state.graph.clone(),
        mode: state.mode,
        source_node: state.path_selection.source_node,
        target_node: state.path_selection.target_node,
        pending_edge_source: state.editor.pending_edge_source,
        candidate_edge: state.candidate_edge,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::InteractionMode;
    use crate::app::AppState;
    use glam::Vec2;

    #[test]
    fn build_reflects_graph_and_selection() {
        let mut state = AppState::new();
        let a = state.graph.add_node(Vec2::new(0.0, 0.0));
        state.graph.add_node(Vec2::new(0.5, 0.0));
        state.editor.pending_edge_source = Some(a);
        state.mode = InteractionMode::AwaitingSource;

        let scene = build(&state);

        assert_eq!(scene.graph.node_count(), 2);
        assert_eq!(scene.pending_edge_source, Some(a));
        assert_eq!(scene.mode, InteractionMode::AwaitingSource);
        assert!(!scene.is_running());
    }

    #[test]
    fn build_carries_candidate_edge_during_run() {
        let mut state = AppState::new();
        state.graph.add_node(Vec2::new(0.0, 0.0));
        state.graph.add_node(Vec2::new(0.5, 0.0));
        state.mode = InteractionMode::RunningAlgorithm;
        state.candidate_edge = Some((0, 1));

        let scene = build(&state);

        assert!(scene.is_running());
        assert_eq!(scene.candidate_edge, Some((0, 1)));
    }
}
