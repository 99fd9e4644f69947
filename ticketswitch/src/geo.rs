//! Geographic search areas.
//!
//! Coordinates are [`geo_types::Point`]s, so `x` is longitude and `y` is
//! latitude, both in degrees.

pub use geo_types::Point;

/// A point and a radius around it, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Centre of the area.
    pub point: Point<f64>,
    /// Radius; must be positive.
    pub radius: f64,
}

impl Circle {
    /// Creates a circle from latitude and longitude.
    #[must_use]
    pub fn new(lat: f64, lng: f64, radius: f64) -> Self {
        Self::with_point(Point::new(lng, lat), radius)
    }

    /// Creates a circle around an existing point.
    #[must_use]
    pub const fn with_point(point: Point<f64>, radius: f64) -> Self {
        Self { point, radius }
    }

    /// Latitude of the centre.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// Longitude of the centre.
    #[must_use]
    pub fn lng(&self) -> f64 {
        self.point.x()
    }

    /// Returns `true` when the radius is positive and the coordinates are in
    /// range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.radius > 0.0
            && (-90.0..=90.0).contains(&self.lat())
            && (-180.0..=180.0).contains(&self.lng())
    }

    /// Wire form: `lat:lng:radius`, six decimal places each.
    #[must_use]
    pub fn param(&self) -> String {
        format!("{:.6}:{:.6}:{:.6}", self.lat(), self.lng(), self.radius)
    }
}
