use crate::{GeoPoint, projection};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A point in spherical Web-Mercator (EPSG:3857), in meters.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MercatorPoint {
	pub x: f64,
	pub y: f64,
}

impl MercatorPoint {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Converts this point back to WGS84 longitude/latitude.
	#[must_use]
	pub fn to_geodetic(&self) -> GeoPoint {
		projection::to_geodetic(self)
	}
}

impl Debug for MercatorPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "MercatorPoint({}, {})", self.x, self.y)
	}
}

impl From<[f64; 2]> for MercatorPoint {
	fn from(value: [f64; 2]) -> Self {
		MercatorPoint::new(value[0], value[1])
	}
}

impl From<MercatorPoint> for [f64; 2] {
	fn from(value: MercatorPoint) -> Self {
		[value.x, value.y]
	}
}
