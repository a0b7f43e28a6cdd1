//! Great-circle distances between waypoints in the EPSG:4326 frame.

use crate::types::{Coordinate, Waypoint};

/// Mean Earth radius in meters, the value web maps use for sphere distances.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Haversine distance in meters between two lon/lat coordinates.
pub fn haversine_m(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon() - a.lon()).to_radians();
    let h = lat1.cos().mul_add(
        lat2.cos() * (d_lon / 2.0).sin().powi(2),
        (d_lat / 2.0).sin().powi(2),
    );
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Distance from the previous waypoint for every row; the first row has none.
pub fn leg_distances(waypoints: &[Waypoint]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(waypoints.len());
    let mut prev: Option<Coordinate> = None;
    for wp in waypoints {
        out.push(prev.map(|p| haversine_m(p, wp.coordinate)));
        prev = Some(wp.coordinate);
    }
    out
}

pub fn total_length_m(waypoints: &[Waypoint]) -> f64 {
    leg_distances(waypoints).into_iter().flatten().sum()
}

/// Human readable distance: meters below 1 km, kilometers above.
pub fn format_distance(meters: f64) -> String {
    if meters < 1_000.0 {
        format!("{meters:.1} m")
    } else {
        format!("{:.3} km", meters / 1_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::vertex_label;

    fn wp(i: usize, x: f64, y: f64) -> Waypoint {
        Waypoint::vertex(vertex_label(i), Coordinate::new(x, y))
    }

    #[test]
    fn one_degree_of_longitude_on_the_equator() {
        let d = haversine_m(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        let expected = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn identical_points_are_zero_apart() {
        let c = Coordinate::new(78.9629, 20.5937);
        assert!(haversine_m(c, c).abs() < 1e-9);
    }

    #[test]
    fn legs_follow_sequence_order() {
        let wps = [wp(0, 0.0, 0.0), wp(1, 0.0, 1.0), wp(2, 0.0, 3.0)];
        let legs = leg_distances(&wps);
        assert_eq!(legs.len(), 3);
        assert!(legs[0].is_none());
        let one = legs[1].expect("second leg");
        let two = legs[2].expect("third leg");
        assert!((two - 2.0 * one).abs() < 1e-6);
        assert!((total_length_m(&wps) - 3.0 * one).abs() < 1e-6);
    }

    #[test]
    fn distance_text() {
        assert_eq!(format_distance(12.34), "12.3 m");
        assert_eq!(format_distance(1_500.0), "1.500 km");
    }
}
