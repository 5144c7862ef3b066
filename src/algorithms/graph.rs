//! Defines the city graph and associated functions.
//!
//! Cities live in a [`petgraph`] undirected graph and a [`HashMap`] maps
//! city names to their [`NodeIndex`] for fast lookup. Edges carry no
//! weight: the cost of a road is the haversine distance between its two
//! ends and is computed on demand.

use std::collections::{BTreeSet, HashMap};

use ordered_float::OrderedFloat;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::city::City;
use crate::edge::Edge;
use crate::errors::GraphError;
use crate::haversine;

/// Read-only graph of cities connected by roads.
///
/// Roads are symmetric: if `a` neighbors `b`, `b` neighbors `a`. Every
/// road endpoint is a city of the graph, which the
/// [`CityGraphBuilder`] guarantees.
#[derive(Debug, Clone)]
pub struct CityGraph {
    graph: UnGraph<City, ()>,
    node_indices: HashMap<String, NodeIndex>,
}

/// Collects cities and roads, then validates them into a [`CityGraph`].
#[derive(Debug, Default, Clone)]
pub struct CityGraphBuilder {
    cities: Vec<City>,
    roads: Vec<(String, String)>,
}

impl CityGraphBuilder {
    /// Adds a city.
    pub fn city(self, name: &str, state: &str, latitude: f64, longitude: f64) -> Self {
        self.add_city(City::new(name, state, latitude, longitude))
    }

    /// Adds an already constructed city.
    pub fn add_city(mut self, city: City) -> Self {
        self.cities.push(city);
        self
    }

    /// Adds a road between two cities. Order does not matter and
    /// repeated roads are merged.
    pub fn road(mut self, a: &str, b: &str) -> Self {
        self.roads.push((a.to_string(), b.to_string()));
        self
    }

    /// Builds the graph.
    ///
    /// # Errors
    /// * [`GraphError::DuplicateCity`] if a name was added twice.
    /// * [`GraphError::UnknownCity`] if a road references a city that
    ///   was never added.
    /// * [`GraphError::SelfLoop`] if a road starts and ends at the same
    ///   city.
    pub fn build(self) -> Result<CityGraph, GraphError> {
        let mut graph: UnGraph<City, ()> = UnGraph::with_capacity(self.cities.len(), self.roads.len());
        let mut node_indices = HashMap::with_capacity(self.cities.len());

        for city in self.cities {
            if node_indices.contains_key(&city.name) {
                return Err(GraphError::DuplicateCity(city.name));
            }
            let name = city.name.clone();
            let index = graph.add_node(city);
            node_indices.insert(name, index);
        }

        for (a, b) in self.roads {
            if a == b {
                return Err(GraphError::SelfLoop(a));
            }
            let from = *node_indices.get(&a).ok_or(GraphError::UnknownCity(a))?;
            let to = *node_indices.get(&b).ok_or(GraphError::UnknownCity(b))?;
            graph.update_edge(from, to, ());
        }

        debug!(
            "built city graph with {} cities and {} roads",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(CityGraph {
            graph,
            node_indices,
        })
    }
}

impl CityGraph {
    /// Starts an empty [`CityGraphBuilder`].
    pub fn builder() -> CityGraphBuilder {
        CityGraphBuilder::default()
    }

    /// Returns the city with the given name.
    pub fn city(&self, name: &str) -> Option<&City> {
        self.index_of(name).map(|index| &self.graph[index])
    }

    /// Returns true if the graph holds a city with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Returns the neighbors of a city, sorted by name.
    ///
    /// # Errors
    /// [`GraphError::UnknownCity`] if the city is not in the graph.
    pub fn neighbors(&self, name: &str) -> Result<Vec<&City>, GraphError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| GraphError::UnknownCity(name.to_string()))?;
        let mut neighbors: Vec<&City> = self.neighbor_indices(index).map(|n| &self.graph[n]).collect();
        neighbors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(neighbors)
    }

    /// Returns the cost in kilometers of the road between two cities.
    ///
    /// # Errors
    /// * [`GraphError::UnknownCity`] if either city is not in the graph.
    /// * [`GraphError::NotAdjacent`] if no road connects them.
    pub fn edge_cost(&self, a: &str, b: &str) -> Result<f64, GraphError> {
        let from = self
            .index_of(a)
            .ok_or_else(|| GraphError::UnknownCity(a.to_string()))?;
        let to = self
            .index_of(b)
            .ok_or_else(|| GraphError::UnknownCity(b.to_string()))?;
        if self.graph.find_edge(from, to).is_none() {
            return Err(GraphError::NotAdjacent(a.to_string(), b.to_string()));
        }
        Ok(self.cost_between(from, to))
    }

    /// Returns every city, sorted by name.
    pub fn cities(&self) -> Vec<&City> {
        let mut cities: Vec<&City> = self.graph.node_indices().map(|i| &self.graph[i]).collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        cities
    }

    /// Returns the distinct states of all cities, sorted.
    pub fn states(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|i| self.graph[i].state.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns the cities of one state, sorted by name.
    pub fn cities_in_state(&self, state: &str) -> Vec<&City> {
        let mut cities: Vec<&City> = self
            .graph
            .node_indices()
            .map(|i| &self.graph[i])
            .filter(|city| city.state == state)
            .collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        cities
    }

    /// Returns every road once, with its cost.
    pub fn edges(&self) -> Vec<Edge<'_>> {
        self.graph
            .edge_references()
            .map(|e| Edge {
                from: &self.graph[e.source()],
                to: &self.graph[e.target()],
                cost: OrderedFloat(self.cost_between(e.source(), e.target())),
            })
            .collect()
    }

    /// Get the number of cities in the graph.
    pub fn city_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of roads in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    //---------------------------------------------------------------
    // Index based access for the search engine
    //---------------------------------------------------------------

    pub(crate) fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.node_indices.get(name).copied()
    }

    pub(crate) fn city_at(&self, index: NodeIndex) -> &City {
        &self.graph[index]
    }

    pub(crate) fn neighbor_indices(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(index)
    }

    /// Haversine distance between two cities, adjacent or not.
    pub(crate) fn cost_between(&self, a: NodeIndex, b: NodeIndex) -> f64 {
        haversine::distance(&self.graph[a].location, &self.graph[b].location)
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    fn triangle() -> CityGraph {
        CityGraph::builder()
            .city("Pune", "Maharashtra", 18.5204, 73.8567)
            .city("Mumbai", "Maharashtra", 19.0760, 72.8777)
            .city("Nashik", "Maharashtra", 19.9975, 73.7898)
            .city("Goa", "Goa", 15.2993, 74.1240)
            .road("Pune", "Mumbai")
            .road("Mumbai", "Nashik")
            .road("Nashik", "Pune")
            .build()
            .unwrap()
    }

    #[test]
    fn test_counts() {
        let graph = triangle();
        assert_eq!(graph.city_count(), 4);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_neighbors_are_symmetric_and_sorted() {
        let graph = triangle();
        let names: Vec<&str> = graph
            .neighbors("Pune")
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Mumbai", "Nashik"]);

        for city in graph.cities() {
            for neighbor in graph.neighbors(&city.name).unwrap() {
                assert!(graph
                    .neighbors(&neighbor.name)
                    .unwrap()
                    .iter()
                    .any(|c| c.name == city.name));
            }
        }
        assert!(graph.neighbors("Goa").unwrap().is_empty());
    }

    #[test]
    fn test_neighbors_unknown_city() {
        let graph = triangle();
        assert_eq!(
            graph.neighbors("Atlantis"),
            Err(GraphError::UnknownCity("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_edge_cost_matches_haversine() {
        let graph = triangle();
        let pune = graph.city("Pune").unwrap();
        let mumbai = graph.city("Mumbai").unwrap();
        let expected = haversine::distance(&pune.location, &mumbai.location);
        assert_eq!(graph.edge_cost("Pune", "Mumbai").unwrap(), expected);
        assert_eq!(graph.edge_cost("Mumbai", "Pune").unwrap(), expected);
    }

    #[test]
    fn test_edge_cost_not_adjacent() {
        let graph = triangle();
        assert_eq!(
            graph.edge_cost("Pune", "Goa"),
            Err(GraphError::NotAdjacent("Pune".to_string(), "Goa".to_string()))
        );
        assert_eq!(
            graph.edge_cost("Pune", "Atlantis"),
            Err(GraphError::UnknownCity("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_duplicate_roads_merge() {
        let graph = CityGraph::builder()
            .city("A", "X", 0.0, 0.0)
            .city("B", "X", 0.0, 0.1)
            .road("A", "B")
            .road("B", "A")
            .road("A", "B")
            .build()
            .unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_build_rejects_invalid_input() {
        let dangling = CityGraph::builder().city("A", "X", 0.0, 0.0).road("A", "B").build();
        assert_eq!(dangling.unwrap_err(), GraphError::UnknownCity("B".to_string()));

        let duplicate = CityGraph::builder()
            .city("A", "X", 0.0, 0.0)
            .city("A", "Y", 1.0, 1.0)
            .build();
        assert_eq!(duplicate.unwrap_err(), GraphError::DuplicateCity("A".to_string()));

        let self_loop = CityGraph::builder().city("A", "X", 0.0, 0.0).road("A", "A").build();
        assert_eq!(self_loop.unwrap_err(), GraphError::SelfLoop("A".to_string()));
    }

    #[test]
    fn test_states_and_cities_in_state() {
        let graph = triangle();
        assert_eq!(graph.states(), vec!["Goa", "Maharashtra"]);
        let names: Vec<&str> = graph
            .cities_in_state("Maharashtra")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Mumbai", "Nashik", "Pune"]);
        assert!(graph.cities_in_state("Kerala").is_empty());
    }

    #[test]
    fn test_edges_listed_once() {
        let graph = triangle();
        let edges = graph.edges();
        assert_eq!(edges.len(), 3);
        for edge in edges {
            assert_eq!(
                edge.cost.into_inner(),
                graph.edge_cost(&edge.from.name, &edge.to.name).unwrap()
            );
        }
    }
}
