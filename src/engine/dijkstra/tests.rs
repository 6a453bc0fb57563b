use approx::assert_relative_eq;
use glam::Vec2;

use super::{PathRun, ShortestPathEngine};
use crate::core::{CoreError, Graph};
use crate::engine::AlgorithmEvent;

/// Referenz-Szenario: A(0,0), B(1,0), C(1,1) mit den Kanten
/// A->B (100), B->C (100), A->C (141).
fn reference_graph() -> Graph {
    let mut graph = Graph::new();
    let a = graph.add_node(Vec2::new(0.0, 0.0));
    let b = graph.add_node(Vec2::new(1.0, 0.0));
    let c = graph.add_node(Vec2::new(1.0, 1.0));
    graph.add_edge(a, b).unwrap();
    graph.add_edge(b, c).unwrap();
    graph.add_edge(a, c).unwrap();
    graph
}

#[test]
fn test_reference_scenario_prefers_direct_edge() {
    let graph = reference_graph();
    let mut run = PathRun::start(&graph, 0, 2).expect("Lauf startet");
    let events: Vec<AlgorithmEvent> = run.by_ref().collect();

    let result = run.result().expect("Ergebnis nach Abschluss");
    // 141 (direkt) schlägt 200 (über B)
    assert_relative_eq!(result.distance, 141.0);
    assert_eq!(result.edges, vec![(0, 2)]);
    assert!(matches!(
        events.last(),
        Some(AlgorithmEvent::PathReconstructed { edges }) if edges == &vec![(0, 2)]
    ));
}

#[test]
fn test_event_sequence_is_exact() {
    use AlgorithmEvent::*;

    let graph = reference_graph();
    let run = PathRun::start(&graph, 0, 2).unwrap();
    let events: Vec<AlgorithmEvent> = run.collect();

    assert_eq!(
        events,
        vec![
            NodeFinalized { node: 0 },
            RelaxationAttempted { from: 0, to: 1, edge_weight: 100.0 },
            RelaxationApplied { to: 1, new_distance: 100.0, predecessor: 0 },
            RelaxationAttempted { from: 0, to: 2, edge_weight: 141.0 },
            RelaxationApplied { to: 2, new_distance: 141.0, predecessor: 0 },
            // B->C (200) verbessert 141 nicht: kein Relaxations-Ereignis
            NodeFinalized { node: 1 },
            NodeFinalized { node: 2 },
            PathReconstructed { edges: vec![(0, 2)] },
        ]
    );
}

#[test]
fn test_event_sequence_is_deterministic() {
    let graph = reference_graph();

    let first: Vec<AlgorithmEvent> = PathRun::start(&graph, 0, 2).unwrap().collect();
    let second: Vec<AlgorithmEvent> = PathRun::start(&graph, 0, 2).unwrap().collect();

    assert_eq!(first, second);
}

#[test]
fn test_stale_pops_finalize_each_node_once() {
    // Die Rundung der Gewichte macht den Umweg billiger als die direkte
    // Kante: A->B = round(2.98) = 3, A->C = C->B = round(1.49) = 1.
    // B landet dadurch zweimal in der Frontier (erst mit 3, dann mit 2).
    let mut graph = Graph::new();
    let a = graph.add_node(Vec2::new(0.0, 0.0));
    let b = graph.add_node(Vec2::new(0.0298, 0.0));
    let c = graph.add_node(Vec2::new(0.0149, 0.0));
    graph.add_edge(a, b).unwrap();
    graph.add_edge(a, c).unwrap();
    graph.add_edge(c, b).unwrap();

    let mut run = PathRun::start(&graph, a, b).unwrap();
    let events: Vec<AlgorithmEvent> = run.by_ref().collect();

    let finalized: Vec<usize> = events
        .iter()
        .filter_map(|event| match event {
            AlgorithmEvent::NodeFinalized { node } => Some(*node),
            _ => None,
        })
        .collect();
    // Jeder Node genau einmal, der stale Pop von B erzeugt kein Ereignis
    assert_eq!(finalized, vec![a, c, b]);

    let result = run.result().unwrap();
    assert_relative_eq!(result.distance, 2.0);
    assert_eq!(result.edges, vec![(a, c), (c, b)]);
}

#[test]
fn test_path_chain_weight_matches_distance() {
    let mut graph = Graph::new();
    for index in 0..4 {
        graph.add_node(Vec2::new(index as f32 * 0.1, 0.0));
    }
    for index in 0..3 {
        graph.add_edge(index, index + 1).unwrap();
    }

    let mut run = PathRun::start(&graph, 0, 3).unwrap();
    run.by_ref().count();
    let result = run.result().unwrap();

    // Kette zusammenhängend vom Start zum Ziel
    assert_eq!(result.edges.first().map(|edge| edge.0), Some(0));
    assert_eq!(result.edges.last().map(|edge| edge.1), Some(3));
    for pair in result.edges.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }

    let total: f32 = result
        .edges
        .iter()
        .map(|&(from, to)| {
            graph
                .edges_from(from)
                .find(|(_, edge)| edge.to == to)
                .map(|(_, edge)| edge.weight)
                .expect("Pfadkante existiert im Graphen")
        })
        .sum();
    assert_relative_eq!(total, result.distance);
}

#[test]
fn test_unreachable_target_yields_empty_path() {
    let mut graph = Graph::new();
    let a = graph.add_node(Vec2::new(0.0, 0.0));
    let b = graph.add_node(Vec2::new(0.5, 0.0));

    let mut run = PathRun::start(&graph, a, b).unwrap();
    let events: Vec<AlgorithmEvent> = run.by_ref().collect();

    assert_eq!(
        events,
        vec![
            AlgorithmEvent::NodeFinalized { node: a },
            AlgorithmEvent::PathReconstructed { edges: Vec::new() },
        ]
    );
    let result = run.result().unwrap();
    assert!(!result.is_reachable());
    assert!(result.edges.is_empty());
}

#[test]
fn test_source_equals_target_finalizes_source_only() {
    let mut graph = Graph::new();
    let a = graph.add_node(Vec2::new(0.0, 0.0));
    graph.add_node(Vec2::new(0.5, 0.0));

    let mut run = PathRun::start(&graph, a, a).unwrap();
    let events: Vec<AlgorithmEvent> = run.by_ref().collect();

    assert_eq!(
        events,
        vec![
            AlgorithmEvent::NodeFinalized { node: a },
            AlgorithmEvent::PathReconstructed { edges: Vec::new() },
        ]
    );
    let result = run.result().unwrap();
    assert_relative_eq!(result.distance, 0.0);
    assert!(result.is_reachable());
}

#[test]
fn test_self_loop_never_relaxes() {
    let mut graph = Graph::new();
    let a = graph.add_node(Vec2::new(0.2, 0.2));
    graph.add_edge(a, a).unwrap();

    let events: Vec<AlgorithmEvent> = PathRun::start(&graph, a, a).unwrap().collect();

    assert!(!events
        .iter()
        .any(|event| matches!(event, AlgorithmEvent::RelaxationAttempted { .. })));
}

#[test]
fn test_start_rejects_unknown_nodes() {
    let mut graph = Graph::new();
    graph.add_node(Vec2::ZERO);

    assert!(matches!(
        PathRun::start(&graph, 5, 0),
        Err(CoreError::UnknownNode(5))
    ));
    assert!(matches!(
        PathRun::start(&graph, 0, 9),
        Err(CoreError::UnknownNode(9))
    ));
}

#[test]
fn test_engine_allows_only_one_outstanding_run() {
    let graph = reference_graph();
    let mut engine = ShortestPathEngine::new();

    engine.start(&graph, 0, 2).expect("erster Lauf startet");
    assert!(matches!(
        engine.start(&graph, 0, 1),
        Err(CoreError::InvalidState(_))
    ));

    // Sequenz vollständig konsumieren, danach ist ein neuer Lauf erlaubt
    while engine.next_event().is_some() {}
    assert!(!engine.is_running());
    assert_relative_eq!(engine.last_result().unwrap().distance, 141.0);

    engine.start(&graph, 0, 1).expect("zweiter Lauf nach Abschluss");
}

#[test]
fn test_engine_abort_discards_run() {
    let graph = reference_graph();
    let mut engine = ShortestPathEngine::new();

    engine.start(&graph, 0, 2).unwrap();
    engine.next_event().expect("erstes Ereignis");
    engine.abort();

    assert!(!engine.is_running());
    assert!(engine.last_result().is_none());
    engine.start(&graph, 0, 2).expect("Neustart nach Abbruch");
}
