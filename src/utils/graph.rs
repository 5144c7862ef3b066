//! Helper functons for working with graphs.

use crate::city::City;

/// Build roads among cities.
///
/// The function will try to connect every city to every other city.
/// However, constraints can be added to prevent ineligible cities from
/// being connected.
///
/// For example, if the constraint represents the longest road segment
/// we want to model, only cities within that distance of each other get
/// a road. A constraint function is also needed to determine if a
/// connection is valid.
///
/// # Arguments
/// * `cities` - A slice of cities.
/// * `constraint` - Only cities within a constraint can be connected.
/// * `constraint_function` - A function that takes two cities and
///   returns a float to compare against `constraint`.
///
/// # Returns
/// A vector of undirected roads in the format of (from_city, to_city).
/// Each pair appears once.
///
/// # Time Complexity
/// *O*(*n^2*) at worst if the constraint is not met for all cities.
pub fn build_edges<'a>(
    cities: &'a [City],
    constraint: f64,
    constraint_function: fn(&City, &City) -> f64,
) -> Vec<(&'a City, &'a City)> {
    let mut edges = Vec::new();
    for (i, from) in cities.iter().enumerate() {
        for to in &cities[i + 1..] {
            if from.name != to.name && constraint_function(from, to) <= constraint {
                edges.push((from, to));
            }
        }
    }
    edges
}

#[cfg(test)]
mod graph_utils_tests {
    use super::*;
    use crate::haversine;

    fn distance(a: &City, b: &City) -> f64 {
        haversine::distance(&a.location, &b.location)
    }

    #[test]
    fn test_build_edges_respects_constraint() {
        let cities = vec![
            City::new("A", "X", 0.0, 0.0),
            City::new("B", "X", 0.0, 0.5),
            City::new("C", "X", 0.0, 5.0),
        ];
        let edges = build_edges(&cities, 100.0, distance);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].0.name, "A");
        assert_eq!(edges[0].1.name, "B");

        assert_eq!(build_edges(&cities, 10_000.0, distance).len(), 3);
        assert!(build_edges(&cities, 0.0, distance).is_empty());
    }
}
