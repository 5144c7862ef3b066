//! The core of the meetup library.
//!
//! The engine module wraps a [`CityGraph`](crate::graph::CityGraph) and
//! finds the meeting point between two of its cities with the
//! requested search algorithm and heuristic.

/// The router engine module.
pub mod engine {
    use std::fmt;
    use std::str::FromStr;
    use std::time::Instant;

    use petgraph::graph::NodeIndex;
    use serde::{Deserialize, Serialize};

    use crate::{
        algorithms::search::{self, Meeting, Outcome},
        config::SearchConfig,
        errors::SearchError,
        graph::CityGraph,
        heuristics::Heuristic,
        result::SearchResult,
    };

    /// A Router borrows a city graph and runs searches over it.
    #[derive(Debug, Clone, Copy)]
    pub struct Router<'a> {
        graph: &'a CityGraph,
        config: SearchConfig,
    }

    /// Path finding algorithms.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Algorithm {
        /// Scores nodes by cost so far plus the heuristic.
        AStar,
        /// Scores nodes by the heuristic alone. Usually expands fewer
        /// nodes than A*, but the path may be longer.
        GreedyBestFirst,
    }

    impl fmt::Display for Algorithm {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Algorithm::AStar => write!(f, "A*"),
                Algorithm::GreedyBestFirst => write!(f, "Greedy Best-First"),
            }
        }
    }

    impl FromStr for Algorithm {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "a*" | "astar" | "a-star" | "a_star" => Ok(Algorithm::AStar),
                "greedy best-first" | "greedy" | "greedy_best_first" | "gbfs" => {
                    Ok(Algorithm::GreedyBestFirst)
                }
                _ => Err(format!("unknown algorithm: {}", s)),
            }
        }
    }

    impl<'a> Router<'a> {
        /// Creates a new router over the given graph with the default
        /// [`SearchConfig`].
        pub fn new(graph: &'a CityGraph) -> Router<'a> {
            Router::with_config(graph, SearchConfig::default())
        }

        /// Creates a new router with an explicit configuration.
        pub fn with_config(graph: &'a CityGraph, config: SearchConfig) -> Router<'a> {
            Router { graph, config }
        }

        /// The graph this router searches.
        pub fn graph(&self) -> &'a CityGraph {
            self.graph
        }

        pub fn config(&self) -> SearchConfig {
            self.config
        }

        /// Finds the meeting point between two cities.
        ///
        /// # Arguments
        /// * `origin` - Name of the first person's city.
        /// * `destination` - Name of the second person's city.
        /// * `algorithm` - The algorithm to use.
        /// * `heuristic` - The heuristic function to use.
        ///
        /// # Returns
        /// A [`SearchResult`]. When the cities are not connected or the
        /// expansion limit is hit, the result carries the failure and the
        /// statistics but no path.
        ///
        /// # Errors
        /// [`SearchError::UnknownCity`] if either city is not in the
        /// graph. Nothing is searched in that case.
        pub fn search(
            &self,
            origin: &str,
            destination: &str,
            algorithm: Algorithm,
            heuristic: Heuristic,
        ) -> Result<SearchResult, SearchError> {
            info!(
                "Searching meeting point between {} and {} ({}, {})",
                origin, destination, algorithm, heuristic
            );
            let start = Instant::now();

            let from = self
                .graph
                .index_of(origin)
                .ok_or_else(|| SearchError::UnknownCity(origin.to_string()))?;
            let to = self
                .graph
                .index_of(destination)
                .ok_or_else(|| SearchError::UnknownCity(destination.to_string()))?;

            let Outcome { meeting, stats } = search::meet(
                self.graph,
                from,
                to,
                algorithm,
                heuristic,
                self.config.max_expansions,
            );

            let mut result = SearchResult {
                origin: origin.to_string(),
                destination: destination.to_string(),
                algorithm,
                heuristic,
                path: None,
                meeting_point: None,
                total_cost: None,
                origin_leg_cost: None,
                destination_leg_cost: None,
                nodes_generated: stats.nodes_generated,
                nodes_expanded: stats.nodes_expanded,
                elapsed: Default::default(),
                failure: None,
                meeting_index: None,
            };

            match meeting {
                Ok(meeting) => self.fill_meeting(&mut result, meeting),
                Err(failure) => {
                    warn!(
                        "No meeting point between {} and {}: {}",
                        origin, destination, failure
                    );
                    result.failure = Some(failure);
                }
            }
            result.elapsed = start.elapsed();

            debug!("nodes generated: {}", result.nodes_generated);
            debug!("elapsed: {:?}", result.elapsed);
            info!("Finished meeting point search");
            Ok(result)
        }

        fn fill_meeting(&self, result: &mut SearchResult, meeting: Meeting) {
            let origin_leg_cost = self.leg_cost(&meeting.origin_leg);
            let destination_leg_cost = self.leg_cost(&meeting.destination_leg);

            let path: Vec<String> = meeting
                .origin_leg
                .iter()
                .chain(meeting.destination_leg.iter().skip(1))
                .map(|&index| self.graph.city_at(index).name.clone())
                .collect();
            let meeting_point = self.graph.city_at(meeting.meeting_point).name.clone();

            debug!("path: {:?}", path);
            debug!("meeting point: {}", meeting_point);
            debug!("cost: {} + {}", origin_leg_cost, destination_leg_cost);

            result.path = Some(path);
            result.meeting_point = Some(meeting_point);
            result.total_cost = Some(origin_leg_cost + destination_leg_cost);
            result.origin_leg_cost = Some(origin_leg_cost);
            result.destination_leg_cost = Some(destination_leg_cost);
            result.meeting_index = Some(meeting.origin_leg.len().saturating_sub(1));
        }

        /// Sum of the road costs between consecutive cities.
        fn leg_cost(&self, leg: &[NodeIndex]) -> f64 {
            leg.windows(2)
                .map(|pair| self.graph.cost_between(pair[0], pair[1]))
                .sum()
        }
    }
}
