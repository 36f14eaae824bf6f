//! Routes through carved mazes, solved with Dijkstra over the passages.

mod common;

use std::collections::{HashSet, VecDeque};

use common::{PassageGraph, carve, passage_graph};
use mazekit_core::{
    ArrayHeapMinPq, BaseEdge, DijkstraShortestPathFinder, DoubleMapMinPq, Maze, Room, RoomGrid,
    ShortestPath, ShortestPathFinder, WeightedEdge,
};
use mazekit_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

fn corners(grid: RoomGrid) -> (Room, Room) {
    (
        Room::new(0, 0),
        Room::new(grid.rows() - 1, grid.columns() - 1),
    )
}

/// Hop count between two rooms, found by breadth-first search.
fn hops(graph: &PassageGraph, start: Room, end: Room) -> Option<usize> {
    let mut seen = HashSet::from([start]);
    let mut frontier = VecDeque::from([(start, 0_usize)]);
    while let Some((room, depth)) = frontier.pop_front() {
        if room == end {
            return Some(depth);
        }
        for edge in graph.outgoing_edges_from(&room) {
            if seen.insert(*edge.to()) {
                frontier.push_back((*edge.to(), depth + 1));
            }
        }
    }
    None
}

fn assert_follows_passages(maze: &Maze, path: &ShortestPath<Room, WeightedEdge<Room>>) {
    let open: HashSet<(Room, Room)> = maze
        .passages()
        .iter()
        .flat_map(|wall| [(wall.first(), wall.second()), (wall.second(), wall.first())])
        .collect();
    for edge in path.edges() {
        assert!(open.contains(&(*edge.from(), *edge.to())), "{edge:?} crosses a wall");
    }
}

#[rstest]
#[case::square(6, 6, 1)]
#[case::corridor(1, 9, 2)]
#[case::wide(4, 11, 3)]
fn corner_to_corner_route_follows_passages(
    #[case] rows: usize,
    #[case] columns: usize,
    #[case] seed: u64,
) {
    let grid = RoomGrid::new(rows, columns);
    let maze = carve(grid, seed);
    let graph = passage_graph(&maze);
    let (start, end) = corners(grid);

    let path = DijkstraShortestPathFinder::<ArrayHeapMinPq<Room>>::new()
        .find_shortest_path(&graph, &start, &end)
        .expect("unit weights are valid");

    assert!(path.exists());
    let vertices = path.vertices();
    assert_eq!(vertices.first(), Some(&start));
    assert_eq!(vertices.last(), Some(&end));
    assert_follows_passages(&maze, &path);
    let expected = hops(&graph, start, end).expect("perfect mazes are connected");
    assert_eq!(path.edges().len(), expected);
    assert_eq!(path.total_weight(), expected as f64);
}

#[test]
fn queue_strategies_agree_on_the_unique_route() {
    let grid = RoomGrid::new(7, 5);
    let maze = carve(grid, 21);
    let graph = passage_graph(&maze);
    let (start, end) = corners(grid);

    let heap = DijkstraShortestPathFinder::<ArrayHeapMinPq<Room>>::new()
        .find_shortest_path(&graph, &start, &end)
        .expect("unit weights are valid");
    let double_map = DijkstraShortestPathFinder::<DoubleMapMinPq<Room>>::new()
        .find_shortest_path(&graph, &start, &end)
        .expect("unit weights are valid");
    assert_eq!(heap, double_map);
}

#[test]
fn every_room_is_reachable_from_the_entrance() {
    let grid = RoomGrid::new(5, 5);
    let maze = carve(grid, 8);
    let graph = passage_graph(&maze);
    let finder = DijkstraShortestPathFinder::<DoubleMapMinPq<Room>>::new();
    let entrance = Room::new(0, 0);
    for room in grid.rooms() {
        let path = finder
            .find_shortest_path(&graph, &entrance, &room)
            .expect("unit weights are valid");
        assert!(path.exists(), "{room:?} is unreachable");
        if room == entrance {
            assert_eq!(path, ShortestPath::SingleVertex(entrance));
        }
    }
}

#[test]
fn rooms_outside_the_maze_are_unreachable() {
    let grid = RoomGrid::new(3, 3);
    let graph = passage_graph(&carve(grid, 4));
    let path = DijkstraShortestPathFinder::<ArrayHeapMinPq<Room>>::new()
        .find_shortest_path(&graph, &Room::new(0, 0), &Room::new(9, 9))
        .expect("unit weights are valid");
    assert_eq!(path, ShortestPath::Failure);
    assert_eq!(path.total_weight(), f64::INFINITY);
}

#[test]
fn carving_and_routing_record_their_spans() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let grid = RoomGrid::new(3, 4);

    let path = tracing::subscriber::with_default(subscriber, || {
        let maze = carve(grid, 13);
        let graph = passage_graph(&maze);
        let (start, end) = corners(grid);
        DijkstraShortestPathFinder::<ArrayHeapMinPq<Room>>::new()
            .find_shortest_path(&graph, &start, &end)
            .expect("unit weights are valid")
    });

    let spans = layer.spans();
    let carve_span = spans
        .iter()
        .find(|span| span.name == "maze.kruskal_carve")
        .expect("maze.kruskal_carve span must exist");
    assert_eq!(carve_span.fields.get("rooms"), Some(&"12".to_owned()));
    let route_span = spans
        .iter()
        .find(|span| span.name == "shortest_paths.dijkstra")
        .expect("shortest_paths.dijkstra span must exist");
    assert_eq!(
        route_span.fields.get("edges"),
        Some(&path.edges().len().to_string())
    );
}
