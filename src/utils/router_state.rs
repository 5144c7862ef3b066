//! Stores the state of the router: the process-wide city catalog.
//!
//! The catalog is set once at startup and never mutated, so any number
//! of callers may read it concurrently.

use once_cell::sync::OnceCell;

use crate::city::City;
use crate::config::SearchConfig;
use crate::errors::{CatalogError, GraphError};
use crate::graph::CityGraph;
use crate::haversine;
use crate::heuristics::Heuristic;
use crate::india;
use crate::result::SearchResult;
use crate::router::engine::{Algorithm, Router};

/// City graph shared by the whole process.
pub static CATALOG: OnceCell<CityGraph> = OnceCell::new();

/// Average road speed used to turn distances into travel times.
pub const AVG_ROAD_SPEED_KMH: f64 = 60.0;

/// Query struct to find the meeting point between two catalog cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetupQuery {
    /// City of the first person.
    pub origin: String,
    /// City of the second person.
    pub destination: String,
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,
}

/// Initializes the catalog with the built-in Indian dataset.
pub fn init_catalog() -> Result<(), CatalogError> {
    init_catalog_with(india::sample_graph()?)
}

/// Initializes the catalog with a caller-provided graph.
pub fn init_catalog_with(graph: CityGraph) -> Result<(), CatalogError> {
    info!(
        "Initializing city catalog with {} cities and {} roads",
        graph.city_count(),
        graph.edge_count()
    );
    CATALOG.set(graph).map_err(|_| {
        error!("City catalog already initialized");
        CatalogError::AlreadyInitialized
    })
}

/// Checks if the catalog is initialized
pub fn is_catalog_initialized() -> bool {
    CATALOG.get().is_some()
}

/// Returns the catalog graph.
pub fn get_catalog() -> Result<&'static CityGraph, CatalogError> {
    CATALOG.get().ok_or(CatalogError::NotInitialized)
}

/// Returns every catalog city, sorted by name.
pub fn list_cities() -> Result<Vec<&'static City>, CatalogError> {
    Ok(get_catalog()?.cities())
}

/// Returns the states present in the catalog, sorted.
pub fn list_states() -> Result<Vec<&'static str>, CatalogError> {
    Ok(get_catalog()?.states())
}

/// Returns the catalog cities of one state, sorted by name.
pub fn cities_in_state(state: &str) -> Result<Vec<&'static City>, CatalogError> {
    Ok(get_catalog()?.cities_in_state(state))
}

/// Straight-line distance in kilometers between two catalog cities.
pub fn direct_distance(a: &str, b: &str) -> Result<f64, CatalogError> {
    let catalog = get_catalog()?;
    let from = catalog
        .city(a)
        .ok_or_else(|| GraphError::UnknownCity(a.to_string()))?;
    let to = catalog
        .city(b)
        .ok_or_else(|| GraphError::UnknownCity(b.to_string()))?;
    Ok(haversine::distance(&from.location, &to.location))
}

/// Finds the meeting point between two catalog cities.
///
/// The expansion limit comes from [`SearchConfig::from_env`].
pub fn find_meeting_point(query: MeetupQuery) -> Result<SearchResult, CatalogError> {
    info!("Finding meeting point");
    debug!("query: {:?}", query);
    let router = Router::with_config(get_catalog()?, SearchConfig::from_env());
    let result = router.search(
        &query.origin,
        &query.destination,
        query.algorithm,
        query.heuristic,
    )?;
    debug!("result: {:?}", result);
    Ok(result)
}

/// Estimates the minutes needed to drive `distance_km` at
/// [`AVG_ROAD_SPEED_KMH`].
pub fn estimate_travel_minutes(distance_km: f64) -> f64 {
    distance_km / AVG_ROAD_SPEED_KMH * 60.0
}

#[cfg(test)]
mod router_state_tests {
    use super::*;
    use crate::errors::SearchError;

    fn catalog() -> &'static CityGraph {
        // Tests share the process: whoever comes first initializes.
        let _ = init_catalog();
        get_catalog().unwrap()
    }

    #[test]
    fn test_init_twice_fails() {
        catalog();
        assert!(is_catalog_initialized());
        assert_eq!(init_catalog(), Err(CatalogError::AlreadyInitialized));
    }

    #[test]
    fn test_listing() {
        let graph = catalog();
        let cities = list_cities().unwrap();
        assert_eq!(cities.len(), graph.city_count());
        assert!(cities.windows(2).all(|pair| pair[0].name < pair[1].name));

        let states = list_states().unwrap();
        assert!(states.contains(&"Maharashtra"));
        assert!(states.contains(&"Kerala"));

        let names: Vec<&str> = cities_in_state("Kerala")
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Kochi", "Kozhikode", "Thiruvananthapuram"]);
    }

    #[test]
    fn test_direct_distance() {
        catalog();
        let d = direct_distance("Mumbai", "Pune").unwrap();
        assert!((d - 120.0).abs() < 10.0, "unexpected distance {}", d);
        assert_eq!(direct_distance("Pune", "Mumbai").unwrap(), d);
        assert_eq!(
            direct_distance("Mumbai", "Gotham"),
            Err(CatalogError::Graph(GraphError::UnknownCity("Gotham".to_string())))
        );
    }

    #[test]
    fn test_find_meeting_point() {
        catalog();
        let result = find_meeting_point(MeetupQuery {
            origin: "Mumbai".to_string(),
            destination: "Kolkata".to_string(),
            algorithm: Algorithm::AStar,
            heuristic: Heuristic::StraightLine,
        })
        .unwrap();
        let path = result.path.as_ref().unwrap();
        assert_eq!(path.first().map(String::as_str), Some("Mumbai"));
        assert_eq!(path.last().map(String::as_str), Some("Kolkata"));
        assert!(result.total_cost.unwrap() >= direct_distance("Mumbai", "Kolkata").unwrap());
        assert!(result.nodes_generated > 0);

        let unknown = find_meeting_point(MeetupQuery {
            origin: "Mumbai".to_string(),
            destination: "Gotham".to_string(),
            algorithm: Algorithm::GreedyBestFirst,
            heuristic: Heuristic::RoadDistance,
        });
        assert_eq!(
            unknown,
            Err(CatalogError::Search(SearchError::UnknownCity("Gotham".to_string())))
        );
    }

    #[test]
    fn test_estimate_travel_minutes() {
        assert_eq!(estimate_travel_minutes(0.0), 0.0);
        assert_eq!(estimate_travel_minutes(60.0), 60.0);
        assert_eq!(estimate_travel_minutes(90.0), 90.0);
    }
}
