use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::VertexId;
use crate::map::CampusMap;
use crate::path::{find_shortest_path, PathOutcome};

/// High-level route planning request between two location names.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: VertexId,
    pub goal: VertexId,
    pub steps: Vec<VertexId>,
    pub total_distance: u64,
}

impl RoutePlan {
    /// Number of walkways traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the shortest walking route for a request.
///
/// Unknown names fail with [`Error::UnknownLocation`] carrying the suggestion
/// tree's proposal; disconnected locations fail with [`Error::RouteNotFound`].
pub fn plan_route(map: &mut CampusMap, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = map.resolve(&request.start)?;
    let goal_id = map.resolve(&request.goal)?;

    let result = find_shortest_path(&map.graph, start_id, goal_id);
    let PathOutcome::Reachable { path, total_cost } = result.outcome else {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    };

    debug!(
        start = %request.start,
        goal = %request.goal,
        hops = path.len().saturating_sub(1),
        total_cost,
        "planned route"
    );

    Ok(RoutePlan {
        start: start_id,
        goal: goal_id,
        steps: path,
        total_distance: total_cost,
    })
}
