mod common;

use campus_route_lib::{find_shortest_path, PathOutcome, RouteGraph};

use common::{abc_graph, fixture_map, path_weight};

#[test]
fn abc_route_goes_through_b() {
    let graph = abc_graph();
    let result = find_shortest_path(&graph, 0, 2);

    assert_eq!(
        result.outcome,
        PathOutcome::Reachable {
            path: vec![0, 1, 2],
            total_cost: 8,
        }
    );
    assert_eq!(result.predecessors, vec![None, Some(0), Some(1)]);
}

#[test]
fn start_equals_goal_yields_single_vertex() {
    let graph = abc_graph();
    let result = find_shortest_path(&graph, 1, 1);

    assert_eq!(result.path(), &[1]);
    assert_eq!(result.total_cost(), Some(0));
}

#[test]
fn unreachable_goal_reports_explicit_variant() {
    let mut graph = RouteGraph::new(4);
    graph.add_edge(0, 1, 2, "north", "south");
    graph.add_edge(2, 3, 2, "east", "west");

    let result = find_shortest_path(&graph, 0, 3);

    assert_eq!(result.outcome, PathOutcome::Unreachable);
    assert!(!result.is_reachable());
    assert!(result.path().is_empty());
    assert_eq!(result.total_cost(), None);
    // Predecessors are still valid for everything reachable from the start.
    assert_eq!(result.predecessors, vec![None, Some(0), None, None]);
}

#[test]
fn shorter_detour_beats_direct_walkway() {
    let mut graph = RouteGraph::new(3);
    graph.add_edge(0, 2, 20, "north", "south");
    graph.add_edge(0, 1, 4, "east", "west");
    graph.add_edge(1, 2, 4, "north", "south");

    let result = find_shortest_path(&graph, 0, 2);
    assert_eq!(result.path(), &[0, 1, 2]);
    assert_eq!(result.total_cost(), Some(8));
}

#[test]
fn parallel_walkways_use_the_cheaper_one_for_cost() {
    let mut graph = RouteGraph::new(2);
    graph.add_edge(0, 1, 9, "long", "long_back");
    graph.add_edge(0, 1, 2, "short", "short_back");

    let result = find_shortest_path(&graph, 0, 1);
    assert_eq!(result.total_cost(), Some(2));
}

#[test]
fn zero_weight_walkways_are_allowed() {
    let mut graph = RouteGraph::new(3);
    graph.add_edge(0, 1, 0, "in", "out");
    graph.add_edge(1, 2, 0, "up", "down");

    let result = find_shortest_path(&graph, 0, 2);
    assert_eq!(result.path(), &[0, 1, 2]);
    assert_eq!(result.total_cost(), Some(0));
}

#[test]
fn fixture_paths_match_their_reported_cost() {
    let map = fixture_map();
    let graph = &map.graph;
    let count = graph.vertex_count();

    for start in 0..count {
        for goal in 0..count {
            let result = find_shortest_path(graph, start, goal);
            let Some(cost) = result.total_cost() else {
                continue;
            };
            let path = result.path();
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
            assert_eq!(path_weight(graph, path), cost, "{start} -> {goal}");
        }
    }
}

#[test]
fn fixture_costs_are_symmetric() {
    let map = fixture_map();
    let graph = &map.graph;
    let count = graph.vertex_count();

    for start in 0..count {
        for goal in 0..count {
            let forward = find_shortest_path(graph, start, goal).total_cost();
            let backward = find_shortest_path(graph, goal, start).total_cost();
            assert_eq!(forward, backward, "{start} <-> {goal}");
        }
    }
}

#[test]
fn fixture_isolated_location_is_unreachable() {
    let map = fixture_map();
    let start = map.location_id("main_gate").expect("main_gate");
    let goal = map.location_id("guest_house_road").expect("guest_house_road");

    let result = find_shortest_path(&map.graph, start, goal);
    assert_eq!(result.outcome, PathOutcome::Unreachable);
}

#[test]
fn fixture_main_gate_to_it_department() {
    let map = fixture_map();
    let result = find_shortest_path(&map.graph, 0, 4);

    assert_eq!(result.path(), &[0, 1, 2, 3, 4]);
    assert_eq!(result.total_cost(), Some(300));
}
