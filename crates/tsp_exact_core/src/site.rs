use std::fmt;

use serde::Deserialize;

const EARTH_RADIUS_KM: f64 = 6_371.0;
const NINETY: f64 = 90.0;
const ONE_EIGHTY: f64 = NINETY * 2.0;

/// One record of the site file. Field order mirrors the delimited columns:
/// index, name, street, house number, zip code, city, latitude, longitude.
/// Coordinates are decimal degrees; `index` is the 1-based stop identifier
/// used in tours and reports.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Site {
    pub index: usize,
    pub name: String,
    pub street: String,
    pub house_number: String,
    pub zip_code: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Site {
    /// Great-circle distance to `rhs` in kilometers (haversine).
    pub fn distance_km(&self, rhs: &Self) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), rhs.latitude.to_radians());
        let dlat = (rhs.latitude - self.latitude).to_radians();
        let dlng = (rhs.longitude - self.longitude).to_radians();
        let s1 = (dlat / 2.0).sin();
        let s2 = (dlng / 2.0).sin();
        let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }

    pub(crate) fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-NINETY..=NINETY).contains(&self.latitude)
            && (-ONE_EIGHTY..=ONE_EIGHTY).contains(&self.longitude)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.index)
    }
}

#[cfg(test)]
pub(crate) fn test_site(index: usize, name: &str, latitude: f64, longitude: f64) -> Site {
    Site {
        index,
        name: name.to_string(),
        street: String::new(),
        house_number: String::new(),
        zip_code: String::new(),
        city: String::new(),
        latitude,
        longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::test_site;

    #[test]
    fn distance_is_symmetric_and_zero_for_same_site() {
        let a = test_site(1, "a", 37.7749, -122.4194);
        let b = test_site(2, "b", 34.0522, -118.2437);

        let dab = a.distance_km(&b);
        let dba = b.distance_km(&a);

        assert!((dab - dba).abs() < 1e-9);
        assert!(a.distance_km(&a).abs() < 1e-12);
    }

    #[test]
    fn distance_matches_known_great_circle() {
        let berlin = test_site(1, "Berlin", 52.5200, 13.4050);
        let munich = test_site(2, "Munich", 48.1351, 11.5820);

        let d = berlin.distance_km(&munich);
        assert!((d - 504.4).abs() < 2.0, "got {d}");
    }

    #[test]
    fn coordinate_bounds_are_checked() {
        assert!(test_site(1, "a", -90.0, -180.0).has_valid_coordinates());
        assert!(test_site(1, "a", 90.0, 180.0).has_valid_coordinates());
        assert!(!test_site(1, "a", 91.0, 0.0).has_valid_coordinates());
        assert!(!test_site(1, "a", 0.0, -180.5).has_valid_coordinates());
        assert!(!test_site(1, "a", f64::NAN, 0.0).has_valid_coordinates());
        assert!(!test_site(1, "a", 0.0, f64::INFINITY).has_valid_coordinates());
    }

    #[test]
    fn display_shows_name_and_stop_identifier() {
        let site = test_site(3, "Ismaning", 48.2299, 11.6850);
        assert_eq!(site.to_string(), "Ismaning (3)");
    }
}
