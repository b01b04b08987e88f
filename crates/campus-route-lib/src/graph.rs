use serde::Serialize;

/// Compact identifier for a location vertex, valid in `[0, vertex_count)`.
pub type VertexId = usize;

/// Edge record stored on the vertex it departs from.
///
/// Each walkway between two locations is stored twice, once per endpoint, and
/// each copy carries its own direction label. Labels are free text and are
/// never derived from one another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: VertexId,
    pub weight: u32,
    pub direction: String,
}

/// Weighted walking graph over location vertices.
///
/// The vertex count is fixed at construction. Edges are appended while the
/// map is loaded and the graph is treated as immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl RouteGraph {
    /// Create a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of walkways added with [`RouteGraph::add_edge`].
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Connect `src` and `dest` with a walkway of length `weight`.
    ///
    /// One edge record is appended to each endpoint. Parallel walkways are
    /// kept as separate records.
    ///
    /// # Panics
    ///
    /// Panics if either id is outside `[0, vertex_count)`. Callers validate
    /// ids against the location directory before building the graph.
    pub fn add_edge(
        &mut self,
        src: VertexId,
        dest: VertexId,
        weight: u32,
        direction_src_to_dest: impl Into<String>,
        direction_dest_to_src: impl Into<String>,
    ) {
        self.adjacency[src].push(Edge {
            target: dest,
            weight,
            direction: direction_src_to_dest.into(),
        });
        self.adjacency[dest].push(Edge {
            target: src,
            weight,
            direction: direction_dest_to_src.into(),
        });
        self.edge_count += 1;
    }

    /// Return the edges leaving `vertex` in insertion order.
    pub fn neighbours(&self, vertex: VertexId) -> &[Edge] {
        &self.adjacency[vertex]
    }

    /// First edge leaving `from` that arrives at `to`.
    ///
    /// When parallel walkways exist the earliest inserted one wins.
    pub fn edge_between(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.neighbours(from).iter().find(|edge| edge.target == to)
    }
}
