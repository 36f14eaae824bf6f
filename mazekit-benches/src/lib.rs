//! Benchmark support crate for mazekit.
//!
//! Provides seeded fixtures and parameter types used by the Criterion
//! benchmarks for the chained hash map, Kruskal spanning trees and maze
//! carving, and Dijkstra routing.

pub mod error;
pub mod fixtures;
pub mod params;
