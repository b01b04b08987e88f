#![allow(dead_code)]

use std::path::PathBuf;

use campus_route_lib::{load_campus_map, CampusMap, RouteGraph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_map() -> CampusMap {
    load_campus_map(&fixtures_dir().join("campus_map.txt")).expect("fixture campus map loads")
}

/// Vertices A=0, B=1, C=2 with A-B 5 east/west and B-C 3 north/south.
pub fn abc_graph() -> RouteGraph {
    let mut graph = RouteGraph::new(3);
    graph.add_edge(0, 1, 5, "east", "west");
    graph.add_edge(1, 2, 3, "north", "south");
    graph
}

/// Sum of the first stored walkway between each consecutive pair.
pub fn path_weight(graph: &RouteGraph, path: &[usize]) -> u64 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbours(pair[0])
                .iter()
                .filter(|edge| edge.target == pair[1])
                .map(|edge| u64::from(edge.weight))
                .min()
                .expect("consecutive path vertices are adjacent")
        })
        .sum()
}
