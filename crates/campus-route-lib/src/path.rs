use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{RouteGraph, VertexId};

/// Whether the goal could be reached from the start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Least-cost path from start to goal, both inclusive.
    Reachable {
        path: Vec<VertexId>,
        total_cost: u64,
    },
    /// The goal is not connected to the start vertex.
    Unreachable,
}

/// Result of a single-source shortest path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Predecessor of every vertex on its best-known path from the start.
    /// `None` for the start vertex and for vertices that were never reached.
    pub predecessors: Vec<Option<VertexId>>,
    pub outcome: PathOutcome,
}

impl ShortestPath {
    pub fn is_reachable(&self) -> bool {
        matches!(self.outcome, PathOutcome::Reachable { .. })
    }

    /// Vertices from start to goal, or an empty slice when unreachable.
    pub fn path(&self) -> &[VertexId] {
        match &self.outcome {
            PathOutcome::Reachable { path, .. } => path,
            PathOutcome::Unreachable => &[],
        }
    }

    pub fn total_cost(&self) -> Option<u64> {
        match self.outcome {
            PathOutcome::Reachable { total_cost, .. } => Some(total_cost),
            PathOutcome::Unreachable => None,
        }
    }
}

/// Run Dijkstra's algorithm from `start` and extract the least-cost path to
/// `goal`.
///
/// The frontier is drained completely, so `predecessors` describes the
/// shortest path tree for every vertex reachable from `start`, not only the
/// ones on the way to `goal`.
///
/// # Panics
///
/// Panics if `start` or `goal` is not a vertex of `graph`.
pub fn find_shortest_path(graph: &RouteGraph, start: VertexId, goal: VertexId) -> ShortestPath {
    let vertex_count = graph.vertex_count();
    assert!(start < vertex_count, "start vertex {start} out of range");
    assert!(goal < vertex_count, "goal vertex {goal} out of range");

    let mut distances: Vec<Option<u64>> = vec![None; vertex_count];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];
    let mut queue = BinaryHeap::new();

    distances[start] = Some(0);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = entry.cost + u64::from(edge.weight);
            let improves = match distances[next] {
                Some(known) => next_cost < known,
                None => true,
            };
            if improves {
                distances[next] = Some(next_cost);
                predecessors[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    let outcome = match distances[goal] {
        Some(total_cost) => PathOutcome::Reachable {
            path: reconstruct_path(&predecessors, start, goal),
            total_cost,
        },
        None => PathOutcome::Unreachable,
    };

    ShortestPath {
        predecessors,
        outcome,
    }
}

fn reconstruct_path(
    predecessors: &[Option<VertexId>],
    start: VertexId,
    goal: VertexId,
) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = predecessors[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: VertexId,
    cost: u64,
}

impl QueueEntry {
    fn new(node: VertexId, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
