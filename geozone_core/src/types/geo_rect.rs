use crate::{GeoPoint, MercatorPoint};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An axis-aligned geographic rectangle given by its south-west and north-east corners.
///
/// `sw` holds the minimum longitude and latitude, `ne` the maximum ones.
/// A rectangle whose `sw` lies east or north of its `ne`, or that contains a
/// NaN coordinate, is *empty*. [`GeoRect::new_empty`] returns the canonical
/// empty rectangle, which is the identity for [`GeoRect::include_point`] and
/// [`GeoRect::extend`].
///
/// # Examples
/// ```
/// use geozone_core::{GeoPoint, GeoRect};
///
/// let mut rect = GeoRect::new_empty();
/// assert!(rect.is_empty());
///
/// rect.include_point(&GeoPoint::new(10.0, 5.0));
/// rect.include_point(&GeoPoint::new(-10.0, -5.0));
/// assert_eq!(rect.as_array(), [-10.0, -5.0, 10.0, 5.0]);
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoRect {
	pub sw: GeoPoint,
	pub ne: GeoPoint,
}

impl GeoRect {
	/// Creates a rectangle from its corners. The corners are stored as given.
	#[must_use]
	pub fn new(sw: GeoPoint, ne: GeoPoint) -> Self {
		Self { sw, ne }
	}

	/// Creates a rectangle from `west, south, east, north`.
	#[must_use]
	pub fn from_edges(west: f64, south: f64, east: f64, north: f64) -> Self {
		Self::new(GeoPoint::new(west, south), GeoPoint::new(east, north))
	}

	/// Creates an empty rectangle that does not contain any point.
	#[must_use]
	pub fn new_empty() -> Self {
		Self::from_edges(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY)
	}

	/// Returns `true` if the rectangle covers no point at all.
	pub fn is_empty(&self) -> bool {
		!(self.sw.longitude <= self.ne.longitude && self.sw.latitude <= self.ne.latitude)
	}

	/// Grows the rectangle in place so that it includes `point`.
	///
	/// A NaN coordinate poisons the affected axis, which leaves the rectangle empty.
	pub fn include_point(&mut self, point: &GeoPoint) {
		self.sw.longitude = min_or_nan(self.sw.longitude, point.longitude);
		self.sw.latitude = min_or_nan(self.sw.latitude, point.latitude);
		self.ne.longitude = max_or_nan(self.ne.longitude, point.longitude);
		self.ne.latitude = max_or_nan(self.ne.latitude, point.latitude);
	}

	/// Grows the rectangle in place so that it includes the area of `other`.
	pub fn extend(&mut self, other: &GeoRect) {
		self.sw.longitude = min_or_nan(self.sw.longitude, other.sw.longitude);
		self.sw.latitude = min_or_nan(self.sw.latitude, other.sw.latitude);
		self.ne.longitude = max_or_nan(self.ne.longitude, other.ne.longitude);
		self.ne.latitude = max_or_nan(self.ne.latitude, other.ne.latitude);
	}

	/// Non-mutating version of [`extend`](Self::extend).
	#[must_use]
	pub fn extended(mut self, other: &GeoRect) -> GeoRect {
		self.extend(other);
		self
	}

	/// Returns `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.sw.longitude, self.sw.latitude, self.ne.longitude, self.ne.latitude]
	}

	/// Projects both corners to Web-Mercator, returned as `[sw, ne]`.
	#[must_use]
	pub fn to_mercator(&self) -> [MercatorPoint; 2] {
		[self.sw.to_mercator(), self.ne.to_mercator()]
	}
}

impl Default for GeoRect {
	fn default() -> Self {
		Self::new_empty()
	}
}

impl Debug for GeoRect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoRect({}, {}, {}, {})",
			self.sw.longitude, self.sw.latitude, self.ne.longitude, self.ne.latitude
		)
	}
}

fn min_or_nan(a: f64, b: f64) -> f64 {
	if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn max_or_nan(a: f64, b: f64) -> f64 {
	if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}
