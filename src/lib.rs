//! City Meetup Search Library.
//! Finds a meeting point between two cities with informed graph search.
//!
//! The entry points are [`Router`](types::router::engine::Router) for
//! searches over a caller-owned [`CityGraph`](algorithms::graph::CityGraph),
//! and [`router_state`](utils::router_state) for the process-wide catalog
//! of Indian cities.

#[macro_use]
extern crate log;

pub mod config;
pub mod errors;

pub mod types {
    pub mod city;
    pub mod edge;
    pub mod location;
    pub mod result;
    pub mod router;
}

pub mod algorithms {
    pub mod graph;
    pub mod heuristics;
    pub(crate) mod search;
}

pub mod utils {
    pub mod generator;
    pub mod graph;
    pub mod haversine;
    pub mod india;
    pub mod router_state;
}

pub use algorithms::{graph, heuristics};
pub use types::{city, edge, location, result, router};
pub use utils::{generator, haversine, india, router_state};
