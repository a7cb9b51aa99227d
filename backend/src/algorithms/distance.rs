//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// Haversine distance in kilometres between two points given in degrees.
pub fn great_circle_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let half_phi = (d_phi / 2.0).sin();
    let half_lambda = (d_lambda / 2.0).sin();
    let a = half_phi * half_phi + phi1.cos() * phi2.cos() * half_lambda * half_lambda;

    // atan2 stays accurate near antipodes, where asin(sqrt(a)) loses precision.
    let central_angle = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());
    central_angle * EARTH_RADIUS_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(great_circle_km(37.3793, -122.12, 37.3793, -122.12), 0.0);
        assert_eq!(great_circle_km(-90.0, 0.0, -90.0, 0.0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let ab = great_circle_km(51.47, -0.4543, 40.6413, -73.7781);
        let ba = great_circle_km(40.6413, -73.7781, 51.47, -0.4543);
        assert!((ab - ba).abs() < EPS);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = great_circle_km(0.0, 0.0, 1.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 1e-6, "got {}", d);
    }

    #[test]
    fn test_antipodes_are_half_circumference() {
        let d = great_circle_km(0.0, 0.0, 0.0, 180.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((d - expected).abs() < 1e-6, "got {}", d);
    }

    #[test]
    fn test_london_to_new_york() {
        // Heathrow to JFK is roughly 5540 km.
        let d = great_circle_km(51.47, -0.4543, 40.6413, -73.7781);
        assert!((d - 5540.0).abs() < 15.0, "got {}", d);
    }
}
