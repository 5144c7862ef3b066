//! Struct definitions and implementations for [`Location`].

use serde::{Deserialize, Serialize};

/// A [`Location`] is an interface type that represents the geographic
/// position of a city. Typically, this type is used in tandem with the
/// [`City`](`super::city::City`) type.
///
/// Degrees are stored as `f64`; the sample dataset uses 4-decimal
/// coordinates, which is about ten meters of precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a location from degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude,
            longitude,
        }
    }
}
