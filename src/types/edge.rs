//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;

use crate::city::City;

/// An edge is a road between two cities.
/// The cost is the great-circle distance in kilometers.
#[derive(Debug, PartialEq)]
pub struct Edge<'a> {
    /// One end of the edge.
    pub from: &'a City,

    /// The other end of the edge.
    pub to: &'a City,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}
