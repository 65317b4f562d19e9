//! Location collaborator.
//!
//! Resolves the user's coordinates from the best available source and
//! measures distances between coordinate pairs. The interview engine does
//! not use this module.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Coordinates used when neither GPS nor IP lookup yields a position.
pub const FALLBACK_COORDINATES: Coordinates = Coordinates {
    latitude: 40.7128,
    longitude: -74.0060,
};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Where a position came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Device positioning.
    Gps,
    /// IP geolocation.
    Ip,
    /// Static default.
    Fallback,
}

/// A resolved position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// The position.
    pub coordinates: Coordinates,
    /// Which source produced it.
    pub source: LocationSource,
}

/// A source of coordinates.
///
/// Returning `None` means the source is unavailable; the caller moves on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Try to determine the current position.
    async fn locate(&self) -> Option<Coordinates>;
}

/// Resolve a position, preferring GPS, then IP lookup, then the fallback.
pub async fn resolve_location(
    gps: Option<&dyn LocationProvider>,
    ip: Option<&dyn LocationProvider>,
) -> Location {
    if let Some(provider) = gps {
        if let Some(coordinates) = provider.locate().await {
            return Location {
                coordinates,
                source: LocationSource::Gps,
            };
        }
        debug!("GPS location unavailable");
    }

    if let Some(provider) = ip {
        if let Some(coordinates) = provider.locate().await {
            return Location {
                coordinates,
                source: LocationSource::Ip,
            };
        }
        debug!("IP location unavailable");
    }

    debug!("Using fallback location");
    Location {
        coordinates: FALLBACK_COORDINATES,
        source: LocationSource::Fallback,
    }
}

/// Great-circle (haversine) distance in miles.
#[must_use]
pub fn great_circle_miles(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn provider(result: Option<Coordinates>) -> MockLocationProvider {
        let mut mock = MockLocationProvider::new();
        mock.expect_locate().returning(move || result);
        mock
    }

    #[tokio::test]
    async fn test_gps_preferred() {
        let gps = provider(Some(Coordinates::new(51.5, -0.12)));
        let mut ip = MockLocationProvider::new();
        ip.expect_locate().never();

        let location = resolve_location(Some(&gps), Some(&ip)).await;
        assert_eq!(location.source, LocationSource::Gps);
        assert_eq!(location.coordinates.latitude, 51.5);
    }

    #[tokio::test]
    async fn test_ip_when_gps_fails() {
        let gps = provider(None);
        let ip = provider(Some(Coordinates::new(48.85, 2.35)));

        let location = resolve_location(Some(&gps), Some(&ip)).await;
        assert_eq!(location.source, LocationSource::Ip);
    }

    #[tokio::test]
    async fn test_fallback_when_nothing_available() {
        let ip = provider(None);
        let location = resolve_location(None, Some(&ip)).await;
        assert_eq!(location.source, LocationSource::Fallback);
        assert_eq!(location.coordinates, FALLBACK_COORDINATES);

        let location = resolve_location(None, None).await;
        assert_eq!(location.source, LocationSource::Fallback);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert!(great_circle_miles(FALLBACK_COORDINATES, FALLBACK_COORDINATES).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance() {
        // New York to Los Angeles is roughly 2445 miles.
        let la = Coordinates::new(34.0522, -118.2437);
        let d = great_circle_miles(FALLBACK_COORDINATES, la);
        assert!((d - 2445.0).abs() < 10.0, "got {d}");
        assert!((great_circle_miles(la, FALLBACK_COORDINATES) - d).abs() < 1e-9);
    }

    #[test]
    fn test_source_serde() {
        assert_eq!(
            serde_json::to_string(&LocationSource::Fallback).unwrap(),
            "\"fallback\""
        );
    }
}
