/// What the geolocation database knows about one address.
///
/// Only `latitude` and `longitude` feed the map; the rest is carried along for
/// callers that want the full hit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationRecord {
    /// Decimal degrees, positive north.
    pub latitude: f64,
    /// Decimal degrees, positive east.
    pub longitude: f64,
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 code (e.g. "US").
    pub country_code: Option<String>,
    pub country: Option<String>,
    /// Radius in kilometers around the point where the address likely is.
    pub accuracy_radius_km: Option<u16>,
    pub time_zone: Option<String>,
}

impl LocationRecord {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }
}
