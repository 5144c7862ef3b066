//! Definition of the [`SearchResult`] type.

use std::time::Duration;

use serde::Serialize;

use crate::errors::SearchFailure;
use crate::heuristics::Heuristic;
use crate::router::engine::Algorithm;

/// Outcome of one meeting-point search.
///
/// A search that found no meeting point still reports its statistics;
/// `failure` then tells why and the path fields are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub origin: String,
    pub destination: String,
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,

    /// Cities from the origin to the destination, through the meeting
    /// point.
    pub path: Option<Vec<String>>,

    pub meeting_point: Option<String>,

    /// Sum of the road costs along `path`, in kilometers.
    pub total_cost: Option<f64>,

    /// Kilometers the person at the origin travels to the meeting point.
    pub origin_leg_cost: Option<f64>,

    /// Kilometers the person at the destination travels to the meeting
    /// point.
    pub destination_leg_cost: Option<f64>,

    /// Search nodes created or updated, both sides and roots included.
    pub nodes_generated: usize,

    /// Nodes whose neighbors were relaxed.
    pub nodes_expanded: usize,

    /// Wall-clock time of the whole search call.
    pub elapsed: Duration,

    pub failure: Option<SearchFailure>,

    /// Position of the meeting point in `path`.
    #[serde(skip)]
    pub(crate) meeting_index: Option<usize>,
}

impl SearchResult {
    /// Returns true if a meeting point was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// The part of the path travelled from the origin, meeting point
    /// included.
    pub fn origin_leg(&self) -> Option<&[String]> {
        let path = self.path.as_ref()?;
        let meeting_index = self.meeting_index?;
        Some(&path[..=meeting_index])
    }

    /// The part of the path travelled from the destination, listed from
    /// the meeting point to the destination.
    pub fn destination_leg(&self) -> Option<&[String]> {
        let path = self.path.as_ref()?;
        let meeting_index = self.meeting_index?;
        Some(&path[meeting_index..])
    }

    /// Compares everything but the elapsed time.
    pub fn same_outcome(&self, other: &SearchResult) -> bool {
        SearchResult {
            elapsed: other.elapsed,
            ..self.clone()
        } == *other
    }
}
