//! Random city graphs, for tests and demos.

use rand::Rng;

use crate::city::City;
use crate::errors::GraphError;
use crate::graph::CityGraph;
use crate::haversine;
use crate::location::Location;
use crate::utils::graph::build_edges;

/// Kilometers per degree of latitude.
const KM_PER_DEGREE: f64 = 111.32;

/// State given to every generated city.
pub const GENERATED_STATE: &str = "Generated";

/// Generate `capacity` cities uniformly spread within `radius_km` of
/// `location`. Cities are named `City-0`, `City-1`, ...
///
/// Uses a flat-earth approximation, which is fine for radii of a few
/// hundred kilometers away from the poles.
pub fn generate_cities_near(
    location: &Location,
    radius_km: f64,
    capacity: usize,
    rng: &mut impl Rng,
) -> Vec<City> {
    let km_per_degree_lon = KM_PER_DEGREE * location.latitude.to_radians().cos();
    (0..capacity)
        .map(|i| {
            let distance = radius_km * rng.gen::<f64>().sqrt();
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            City::new(
                format!("City-{}", i),
                GENERATED_STATE,
                location.latitude + distance * bearing.cos() / KM_PER_DEGREE,
                location.longitude + distance * bearing.sin() / km_per_degree_lon,
            )
        })
        .collect()
}

/// Generate a city graph near `location` where every pair of cities at
/// most `road_km` apart is connected by a road. Sparse settings may
/// leave the graph disconnected.
pub fn generate_graph_near(
    location: &Location,
    radius_km: f64,
    capacity: usize,
    road_km: f64,
    rng: &mut impl Rng,
) -> Result<CityGraph, GraphError> {
    let cities = generate_cities_near(location, radius_km, capacity, rng);
    let roads: Vec<(String, String)> = build_edges(&cities, road_km, |from, to| {
        haversine::distance(&from.location, &to.location)
    })
    .into_iter()
    .map(|(from, to)| (from.name.clone(), to.name.clone()))
    .collect();

    let mut builder = CityGraph::builder();
    for city in cities {
        builder = builder.add_city(city);
    }
    for (from, to) in &roads {
        builder = builder.road(from, to);
    }
    builder.build()
}
