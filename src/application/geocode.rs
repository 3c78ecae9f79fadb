use crate::domain::place::GeoPoint;

/// Resolve an address to coordinates.
///
/// Real geocoding sits behind a third-party API; this stub resolves every
/// address to the same Manhattan block so requests without an explicit
/// location still get a usable geolocation.
pub fn lookup_coordinates(_address: &str) -> GeoPoint {
    GeoPoint {
        lat: 40.7484405,
        lng: -73.9878584,
    }
}
