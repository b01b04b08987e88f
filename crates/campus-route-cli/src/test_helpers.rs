// Test utilities used across `campus-route-cli` tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use campus_route_lib::{parse_campus_map, plan_route, CampusMap, RouteRequest, RouteSummary};

/// Three locations in a row: A -(5 east)- B -(3 north)- C, plus an isolated D.
pub const ABC_MAP: &str = "4 2\n\
    0 1 5 east west\n\
    1 2 3 north south\n\
    A 0\n\
    B 1\n\
    C 2\n\
    D 3\n";

pub fn abc_map() -> CampusMap {
    parse_campus_map(ABC_MAP).expect("valid test map")
}

/// Summary of the A -> C route.
pub fn abc_summary() -> RouteSummary {
    let mut map = abc_map();
    let plan = plan_route(&mut map, &RouteRequest::new("A", "C")).expect("route exists");
    RouteSummary::from_plan(&map, &plan).expect("summary")
}
