use crate::{MercatorPoint, projection};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A geodetic coordinate on the WGS84 sphere, in degrees.
///
/// No range validation is applied: callers may pass any float. Conversions only
/// clamp where the math is undefined (see [`projection::to_mercator`]).
///
/// # Examples
/// ```
/// use geozone_core::GeoPoint;
///
/// let point = GeoPoint::new(116.397499, 39.908722);
/// assert_eq!(point.as_array(), [116.397499, 39.908722]);
/// assert_eq!(GeoPoint::from([116.397499, 39.908722]), point);
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoPoint {
	pub longitude: f64,
	pub latitude: f64,
}

impl GeoPoint {
	#[must_use]
	pub fn new(longitude: f64, latitude: f64) -> Self {
		Self { longitude, latitude }
	}

	/// Returns the point as `[longitude, latitude]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		[self.longitude, self.latitude]
	}

	/// Projects this point to spherical Web-Mercator (EPSG:3857).
	#[must_use]
	pub fn to_mercator(&self) -> MercatorPoint {
		projection::to_mercator(self)
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoPoint({}, {})", self.longitude, self.latitude)
	}
}

impl From<[f64; 2]> for GeoPoint {
	fn from(value: [f64; 2]) -> Self {
		GeoPoint::new(value[0], value[1])
	}
}

impl<'a, T> From<&'a [T; 2]> for GeoPoint
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		GeoPoint::new(value[0].into(), value[1].into())
	}
}

impl From<(f64, f64)> for GeoPoint {
	fn from(value: (f64, f64)) -> Self {
		GeoPoint::new(value.0, value.1)
	}
}

impl From<&GeoPoint> for GeoPoint {
	fn from(value: &GeoPoint) -> Self {
		*value
	}
}

impl From<geo::Coord<f64>> for GeoPoint {
	fn from(value: geo::Coord<f64>) -> Self {
		GeoPoint::new(value.x, value.y)
	}
}

impl From<&geo::Coord<f64>> for GeoPoint {
	fn from(value: &geo::Coord<f64>) -> Self {
		GeoPoint::new(value.x, value.y)
	}
}

impl From<geo::Point<f64>> for GeoPoint {
	fn from(value: geo::Point<f64>) -> Self {
		GeoPoint::new(value.x(), value.y())
	}
}

impl From<GeoPoint> for geo::Coord<f64> {
	fn from(value: GeoPoint) -> Self {
		geo::Coord {
			x: value.longitude,
			y: value.latitude,
		}
	}
}
