//! Tests for the Dijkstra solver.

use std::collections::HashMap;

use mazekit_test_support::tracing::capture;
use proptest::prelude::*;
use rstest::rstest;

use crate::{
    AdjacencyListDirectedGraph, ArrayHeapMinPq, DoubleMapMinPq, PriorityQueueError, WeightedEdge,
    graphs::BaseEdge, test_utils::suite_proptest_config,
};

use super::{
    DijkstraShortestPathFinder, ShortestPath, ShortestPathError, ShortestPathErrorCode,
    ShortestPathFinder,
};

type TestGraph<V> = AdjacencyListDirectedGraph<V, WeightedEdge<V>>;

fn graph_of<V: std::hash::Hash + Eq + Clone>(edges: &[(V, V, f64)]) -> TestGraph<V> {
    edges
        .iter()
        .cloned()
        .map(|(from, to, weight)| WeightedEdge::new(from, to, weight))
        .collect()
}

fn scenario() -> TestGraph<char> {
    graph_of(&[
        ('A', 'B', 1.0),
        ('B', 'C', 2.0),
        ('A', 'C', 5.0),
        ('C', 'D', 1.0),
    ])
}

fn double_map() -> DijkstraShortestPathFinder<DoubleMapMinPq<char>> {
    DijkstraShortestPathFinder::new()
}

fn array_heap() -> DijkstraShortestPathFinder<ArrayHeapMinPq<char>> {
    DijkstraShortestPathFinder::new()
}

fn check_scenario<F: ShortestPathFinder<TestGraph<char>>>(finder: &F) {
    let path = finder
        .find_shortest_path(&scenario(), &'A', &'D')
        .expect("valid graph");
    let expected = vec![
        WeightedEdge::new('A', 'B', 1.0),
        WeightedEdge::new('B', 'C', 2.0),
        WeightedEdge::new('C', 'D', 1.0),
    ];
    assert_eq!(path, ShortestPath::Success(expected));
    assert!((path.total_weight() - 4.0).abs() < f64::EPSILON);
    assert_eq!(path.vertices(), vec!['A', 'B', 'C', 'D']);
}

#[test]
fn follows_cheaper_detour_with_double_map_queue() {
    check_scenario(&double_map());
}

#[test]
fn follows_cheaper_detour_with_array_heap_queue() {
    check_scenario(&array_heap());
}

#[test]
fn start_equal_to_end_is_a_single_vertex() {
    let path = double_map()
        .find_shortest_path(&scenario(), &'C', &'C')
        .expect("valid graph");
    assert_eq!(path, ShortestPath::SingleVertex('C'));
    assert!(path.exists());
    assert!(path.edges().is_empty());
    assert_eq!(path.vertices(), vec!['C']);
    assert!(path.total_weight().abs() < f64::EPSILON);
}

#[rstest]
#[case::against_edge_direction('D', 'A')]
#[case::unknown_target('A', 'Z')]
#[case::unknown_start('Z', 'A')]
fn unreachable_target_fails(#[case] start: char, #[case] end: char) {
    let path = array_heap()
        .find_shortest_path(&scenario(), &start, &end)
        .expect("valid graph");
    assert_eq!(path, ShortestPath::Failure);
    assert!(!path.exists());
    assert!(path.vertices().is_empty());
    assert!(path.total_weight().is_infinite());
}

#[test]
fn lowers_tentative_distances_through_cheaper_routes() {
    // C is first queued at 10, then lowered to 3 through B.
    let graph = graph_of(&[
        ('A', 'C', 10.0),
        ('A', 'B', 1.0),
        ('B', 'C', 2.0),
        ('C', 'D', 0.0),
    ]);
    let path = double_map()
        .find_shortest_path(&graph, &'A', &'D')
        .expect("valid graph");
    assert_eq!(path.vertices(), vec!['A', 'B', 'C', 'D']);
    assert!((path.total_weight() - 3.0).abs() < f64::EPSILON);
}

#[rstest]
#[case::negative(-2.0)]
#[case::nan(f64::NAN)]
#[case::infinite(f64::INFINITY)]
fn rejects_invalid_reachable_weights(#[case] weight: f64) {
    let graph = graph_of(&[('A', 'B', 1.0), ('B', 'C', weight)]);
    let err = double_map()
        .find_shortest_path(&graph, &'A', &'C')
        .expect_err("weight must be rejected");
    assert_eq!(err.code(), ShortestPathErrorCode::InvalidWeight);
    assert_eq!(err.code().as_str(), "SHORTEST_PATH_INVALID_WEIGHT");
}

#[test]
fn queue_errors_convert_with_their_own_code() {
    let err = ShortestPathError::from(PriorityQueueError::MissingItem);
    assert_eq!(err, ShortestPathError::Queue(PriorityQueueError::MissingItem));
    assert_eq!(err.code().to_string(), "SHORTEST_PATH_QUEUE");
}

#[test]
fn search_stops_once_target_is_settled() {
    let graph = graph_of(&[('A', 'B', 1.0), ('B', 'C', 1.0), ('C', 'D', 1.0)]);
    let finder = double_map();
    let tree = finder
        .construct_shortest_paths_tree(&graph, &'A', &'B')
        .expect("valid graph");
    assert_eq!(tree.len(), 1);
    assert!(tree.contains_key(&'B'));
}

#[test]
fn extraction_rejects_broken_trees() {
    let finder = double_map();
    let mut tree = HashMap::new();
    tree.insert('C', WeightedEdge::new('B', 'C', 1.0));
    assert_eq!(finder.extract_shortest_path(&tree, &'A', &'C'), ShortestPath::Failure);

    tree.insert('B', WeightedEdge::new('C', 'B', 1.0));
    assert_eq!(finder.extract_shortest_path(&tree, &'A', &'C'), ShortestPath::Failure);
}

#[test]
fn records_span_and_outcome() {
    let (result, layer) = capture(|| double_map().find_shortest_path(&scenario(), &'A', &'D'));
    assert!(result.is_ok_and(|path| path.exists()));
    let span = layer
        .span_named("shortest_paths.dijkstra")
        .expect("span recorded");
    assert_eq!(span.fields.get("edges").map(String::as_str), Some("3"));
    let finished = layer.events_with_message("dijkstra search finished");
    assert_eq!(finished.len(), 1);
    assert_eq!(
        finished[0].fields.get("target_settled").map(String::as_str),
        Some("true")
    );
}

// ── Oracle ──────────────────────────────────────────────────────────────

/// All-pairs distances by Floyd-Warshall over integer weights.
fn floyd_warshall(vertex_count: usize, edges: &[(u8, u8, f64)]) -> Vec<Vec<f64>> {
    let mut distance = vec![vec![f64::INFINITY; vertex_count]; vertex_count];
    for (vertex, row) in distance.iter_mut().enumerate() {
        row[vertex] = 0.0;
    }
    for &(from, to, weight) in edges {
        let slot = &mut distance[usize::from(from)][usize::from(to)];
        *slot = slot.min(weight);
    }
    for via in 0..vertex_count {
        for from in 0..vertex_count {
            for to in 0..vertex_count {
                let through = distance[from][via] + distance[via][to];
                if through < distance[from][to] {
                    distance[from][to] = through;
                }
            }
        }
    }
    distance
}

fn small_digraph() -> impl Strategy<Value = (u8, Vec<(u8, u8, f64)>)> {
    (1_u8..=7).prop_flat_map(|vertex_count| {
        let edges = proptest::collection::vec(
            (0..vertex_count, 0..vertex_count, (0_u8..12).prop_map(f64::from)),
            0..=20,
        );
        (Just(vertex_count), edges)
    })
}

proptest! {
    #![proptest_config(suite_proptest_config(96))]

    #[test]
    fn matches_all_pairs_oracle((vertex_count, edges) in small_digraph()) {
        let mut graph = graph_of(&edges);
        for vertex in 0..vertex_count {
            graph.add_vertex(vertex);
        }
        let distances = floyd_warshall(usize::from(vertex_count), &edges);
        let finder = DijkstraShortestPathFinder::<ArrayHeapMinPq<u8>>::new();
        for start in 0..vertex_count {
            for end in 0..vertex_count {
                let path = finder
                    .find_shortest_path(&graph, &start, &end)
                    .map_err(|err| TestCaseError::fail(err.to_string()))?;
                let expected = distances[usize::from(start)][usize::from(end)];
                prop_assert_eq!(path.total_weight(), expected);
                if let ShortestPath::Success(edges) = &path {
                    prop_assert_eq!(*edges[0].from(), start);
                    prop_assert_eq!(edges.last().map(|edge| *edge.to()), Some(end));
                    prop_assert!(edges.windows(2).all(|pair| pair[0].to() == pair[1].from()));
                }
            }
        }
    }
}
