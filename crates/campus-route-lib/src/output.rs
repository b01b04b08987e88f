use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::VertexId;
use crate::map::CampusMap;
use crate::routing::RoutePlan;

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn new(map: &CampusMap, id: VertexId) -> Self {
        Self {
            id,
            name: map.location_name(id).map(str::to_string),
        }
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Turn-by-turn instruction for a single walkway.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Direction {
    pub from: RouteEndpoint,
    pub to: RouteEndpoint,
    pub heading: String,
    pub distance: u32,
}

impl Direction {
    /// Instruction sentence, e.g. `Go east for 5 meters from A to B.`
    pub fn instruction(&self) -> String {
        format!(
            "Go {} for {} meters from {} to {}.",
            self.heading,
            self.distance,
            self.from.display_name(),
            self.to.display_name()
        )
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteEndpoint>,
    pub directions: Vec<Direction>,
    pub total_distance: u64,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved names and
    /// directions.
    ///
    /// For every consecutive pair of steps the first walkway stored between
    /// them supplies the heading and distance. A pair with no walkway between
    /// them yields [`Error::MissingWalkway`].
    pub fn from_plan(map: &CampusMap, plan: &RoutePlan) -> Result<Self> {
        let (Some(&first), Some(&last)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let steps = plan
            .steps
            .iter()
            .map(|&id| RouteEndpoint::new(map, id))
            .collect::<Vec<_>>();

        let directions = plan
            .steps
            .windows(2)
            .map(|pair| {
                let (from, to) = (pair[0], pair[1]);
                let edge = map
                    .graph
                    .edge_between(from, to)
                    .ok_or(Error::MissingWalkway { from, to })?;
                Ok(Direction {
                    from: RouteEndpoint::new(map, from),
                    to: RouteEndpoint::new(map, to),
                    heading: edge.direction.clone(),
                    distance: edge.weight,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            start: RouteEndpoint::new(map, first),
            goal: RouteEndpoint::new(map, last),
            steps,
            directions,
            total_distance: plan.total_distance,
        })
    }

    /// Number of walkways in the route.
    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Path line, one direction per walkway, and the total distance.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let path = self
            .steps
            .iter()
            .map(RouteEndpoint::display_name)
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(
            buffer,
            "The shortest path from {} to {} is: {}",
            self.start.display_name(),
            self.goal.display_name(),
            path
        );
        for direction in &self.directions {
            let _ = writeln!(buffer, "{}", direction.instruction());
        }
        let _ = writeln!(buffer, "Total cost: {} meters.", self.total_distance);
        buffer
    }
}
