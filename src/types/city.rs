//! Struct definitions and implementations for objects that represent
//! vertices in the city graph.
//!
//! A [`City`] is identified by its name alone. Two cities with the same
//! name in different states are not supported; the graph builder
//! rejects duplicates.

use serde::{Deserialize, Serialize};

use super::location::Location;

/// Represent a vertex in the city graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Unique identifier of the city, also its display name.
    pub name: String,

    /// State or union territory the city belongs to. Used by selection
    /// UIs to narrow down the list of cities.
    pub state: String,

    /// Denotes the geographical position of the city.
    ///
    /// See also [`Location`].
    pub location: Location,
}

impl City {
    /// Creates a new city.
    pub fn new(name: impl Into<String>, state: impl Into<String>, latitude: f64, longitude: f64) -> City {
        City {
            name: name.into(),
            state: state.into(),
            location: Location::new(latitude, longitude),
        }
    }
}
