//! Geographic types
//!
//! Validated coordinates and the map regions built around them.

use crate::utils::error::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A point on the globe, in degrees
///
/// Always within range; the only way to obtain one is through validation,
/// including deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = RegistryError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting NaN and out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> RegistryResult<Self> {
        // NaN fails both range checks
        if !LATITUDE_RANGE.contains(&latitude) || !LONGITUDE_RANGE.contains(&longitude) {
            return Err(RegistryError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Extent of a map region in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl CoordinateSpan {
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }

    /// Whether both deltas are positive and no wider than the globe
    pub fn is_valid(&self) -> bool {
        self.latitude_delta > 0.0
            && self.latitude_delta <= 180.0
            && self.longitude_delta > 0.0
            && self.longitude_delta <= 360.0
    }
}

impl Default for CoordinateSpan {
    /// Street-level zoom used when focusing on a single location
    fn default() -> Self {
        Self::new(0.01, 0.01)
    }
}

/// A rectangular map region centered on a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: Coordinate,
    pub span: CoordinateSpan,
}

impl MapRegion {
    pub fn new(center: Coordinate, span: CoordinateSpan) -> Self {
        Self { center, span }
    }

    /// Whether `coordinate` falls inside the region (edges inclusive)
    ///
    /// Longitude distance wraps across the antimeridian.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        let lat_offset = (coordinate.latitude - self.center.latitude).abs();
        if lat_offset > self.span.latitude_delta / 2.0 {
            return false;
        }

        let lon_offset = (coordinate.longitude - self.center.longitude + 180.0).rem_euclid(360.0) - 180.0;
        lon_offset.abs() <= self.span.longitude_delta / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert_eq!(
            Coordinate::new(90.5, 0.0),
            Err(RegistryError::InvalidCoordinate {
                latitude: 90.5,
                longitude: 0.0
            })
        );
        assert!(Coordinate::new(0.0, -180.01).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_coordinate_deserialize_validates() {
        let coordinate: Coordinate =
            serde_json::from_str(r#"{"latitude":40.0,"longitude":-75.0}"#).unwrap();
        assert_eq!(coordinate.latitude(), 40.0);
        assert_eq!(coordinate.longitude(), -75.0);

        let invalid = serde_json::from_str::<Coordinate>(r#"{"latitude":120.0,"longitude":0.0}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_region_contains() {
        let center = Coordinate::new(40.0, -75.0).unwrap();
        let region = MapRegion::new(center, CoordinateSpan::default());

        assert!(region.contains(&center));
        assert!(region.contains(&Coordinate::new(40.004, -75.004).unwrap()));
        assert!(!region.contains(&Coordinate::new(40.02, -75.0).unwrap()));
        assert!(!region.contains(&Coordinate::new(40.0, -74.98).unwrap()));
    }

    #[test]
    fn test_region_wraps_antimeridian() {
        let center = Coordinate::new(0.0, 179.5).unwrap();
        let region = MapRegion::new(center, CoordinateSpan::new(2.0, 2.0));

        assert!(region.contains(&Coordinate::new(0.0, -179.8).unwrap()));
        assert!(!region.contains(&Coordinate::new(0.0, -178.0).unwrap()));
    }

    #[test]
    fn test_span_validity() {
        assert!(CoordinateSpan::default().is_valid());
        assert!(!CoordinateSpan::new(0.0, 1.0).is_valid());
        assert!(!CoordinateSpan::new(1.0, 400.0).is_valid());
        assert!(!CoordinateSpan::new(f64::NAN, 1.0).is_valid());
    }
}
