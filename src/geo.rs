//! Great-circle distance primitive. Pure function, no error paths.

use crate::config::EARTH_RADIUS_KM;

/// A point on the Earth's surface, decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LatLon { latitude, longitude }
    }
}

/// Distance between two points in kilometers via the haversine formula.
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_distance_is_zero() {
        let p = LatLon::new(19.4326, -99.1332);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn is_symmetric() {
        let a = LatLon::new(19.4326, -99.1332);
        let b = LatLon::new(19.55, -99.10);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    // Known two-point distance, Mexico City area.
    #[test]
    fn mexico_city_smoke() {
        let a = LatLon::new(19.4326, -99.1332);
        let b = LatLon::new(19.55, -99.10);
        let d = haversine_km(a, b);
        assert!((d - 13.56).abs() < 0.1, "expected ~13.56 km, got {d}");
    }
}
