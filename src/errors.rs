//! Error types for graph construction, searches and the city catalog.

use serde::Serialize;
use thiserror::Error;

/// Errors raised while building or querying a
/// [`CityGraph`](crate::graph::CityGraph).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown city: {0}")]
    UnknownCity(String),
    #[error("{0} and {1} are not connected by a road")]
    NotAdjacent(String, String),
    #[error("city defined more than once: {0}")]
    DuplicateCity(String),
    #[error("road from {0} to itself")]
    SelfLoop(String),
}

/// Errors that abort a search before any node is expanded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("unknown city: {0}")]
    UnknownCity(String),
}

/// Reasons a search finished without a meeting point. These are not
/// returned as errors: they are carried inside a
/// [`SearchResult`](crate::result::SearchResult) so the statistics of the
/// failed search remain available.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchFailure {
    #[error("search exceeded the limit of {limit} expansions")]
    Exhausted { limit: usize },
    #[error("no path connects the two cities")]
    Disconnected,
}

/// Errors from the process-wide catalog in
/// [`router_state`](crate::router_state).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("city catalog not initialized")]
    NotInitialized,
    #[error("city catalog already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
