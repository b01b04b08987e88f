//! Campus route library entry points.
//!
//! This crate loads a campus map description into memory, builds the walking
//! graph and location directory, and runs shortest-path queries with
//! turn-by-turn directions. Misspelled location names are resolved through a
//! self-adjusting suggestion tree. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod directory;
pub mod error;
pub mod graph;
pub mod history;
pub mod map;
pub mod output;
pub mod path;
pub mod routing;
pub mod suggest;

pub use directory::LocationDirectory;
pub use error::{Error, Result};
pub use graph::{Edge, RouteGraph, VertexId};
pub use history::{SearchHistory, SearchHistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use map::{default_map_path, load_campus_map, parse_campus_map, CampusMap};
pub use output::{Direction, RouteEndpoint, RouteSummary};
pub use path::{find_shortest_path, PathOutcome, ShortestPath};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use suggest::SuggestTree;
