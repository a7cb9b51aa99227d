//! Pure computations: great-circle distance and candidate ranking.

pub mod distance;
pub mod ranking;

pub use distance::{great_circle_km, EARTH_RADIUS_KM};
pub use ranking::{rank_candidates, sort_airports, Origin};
