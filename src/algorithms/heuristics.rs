//! Cost-to-go estimators used to guide the search.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::haversine;

/// Roads are rarely straight. Straight-line distances are inflated by
/// this factor to estimate the road distance.
///
/// The inflated estimate can exceed the true remaining cost, so A* loses
/// its optimality guarantee under [`Heuristic::RoadDistance`]. The
/// search keeps it that way.
pub const ROAD_DISTANCE_FACTOR: f64 = 1.4;

/// Heuristic functions, selected per search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heuristic {
    /// Great-circle distance to the target. Never overestimates when
    /// road costs are great-circle distances.
    StraightLine,
    /// Great-circle distance times [`ROAD_DISTANCE_FACTOR`].
    RoadDistance,
}

impl Heuristic {
    /// Estimates the remaining cost in kilometers from `city` to
    /// `target`.
    pub fn estimate(&self, city: &City, target: &City) -> f64 {
        let straight_line = haversine::distance(&city.location, &target.location);
        match self {
            Heuristic::StraightLine => straight_line,
            Heuristic::RoadDistance => straight_line * ROAD_DISTANCE_FACTOR,
        }
    }

    /// Whether the estimate is guaranteed not to exceed the true cost on
    /// a graph whose road costs are great-circle distances.
    pub fn is_admissible(&self) -> bool {
        matches!(self, Heuristic::StraightLine)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::StraightLine => write!(f, "Straight-line"),
            Heuristic::RoadDistance => write!(f, "Road Distance"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "straight-line" | "straight_line" | "straightline" => Ok(Heuristic::StraightLine),
            "road distance" | "road-distance" | "road_distance" => Ok(Heuristic::RoadDistance),
            _ => Err(format!("unknown heuristic: {}", s)),
        }
    }
}

#[cfg(test)]
mod heuristics_tests {
    use super::*;

    fn pune() -> City {
        City::new("Pune", "Maharashtra", 18.5204, 73.8567)
    }

    fn mumbai() -> City {
        City::new("Mumbai", "Maharashtra", 19.0760, 72.8777)
    }

    #[test]
    fn test_straight_line_is_haversine() {
        let (a, b) = (pune(), mumbai());
        assert_eq!(
            Heuristic::StraightLine.estimate(&a, &b),
            haversine::distance(&a.location, &b.location)
        );
    }

    #[test]
    fn test_road_distance_inflates() {
        let (a, b) = (pune(), mumbai());
        let straight = Heuristic::StraightLine.estimate(&a, &b);
        let road = Heuristic::RoadDistance.estimate(&a, &b);
        assert!((road - straight * 1.4).abs() < 1e-9);
        assert!(road > straight);
    }

    #[test]
    fn test_zero_at_target() {
        let a = pune();
        assert_eq!(Heuristic::StraightLine.estimate(&a, &a), 0.0);
        assert_eq!(Heuristic::RoadDistance.estimate(&a, &a), 0.0);
    }

    #[test]
    fn test_admissibility_flag() {
        assert!(Heuristic::StraightLine.is_admissible());
        assert!(!Heuristic::RoadDistance.is_admissible());
    }

    #[test]
    fn test_labels_round_trip() {
        for heuristic in [Heuristic::StraightLine, Heuristic::RoadDistance] {
            assert_eq!(heuristic.to_string().parse::<Heuristic>(), Ok(heuristic));
        }
        assert!("manhattan".parse::<Heuristic>().is_err());
    }
}
