use crate::{compute_bounds, is_point_in_polygon, polygon_center, polygon_scale, polygon_span};
use anyhow::Result;
use geozone_core::{GeoPoint, GeoRect, ScaleTable};
use std::fmt::Debug;

/// An owned, implicitly closed polygon outline.
///
/// The last vertex connects back to the first, so the outline does not need to
/// repeat its starting point. All methods delegate to the free functions of
/// this crate.
///
/// # Examples
/// ```
/// use geozone_geometry::{GeoPoint, GeoPolygon};
///
/// let zone = GeoPolygon::from(&[[0, 0], [10, 0], [10, 10], [0, 10]]);
/// assert!(zone.contains(&GeoPoint::new(5.0, 5.0)));
/// assert_eq!(zone.center(), Some(GeoPoint::new(5.0, 5.0)));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct GeoPolygon(pub Vec<GeoPoint>);

impl GeoPolygon {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn as_slice(&self) -> &[GeoPoint] {
		&self.0
	}

	pub fn into_inner(self) -> Vec<GeoPoint> {
		self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn push(&mut self, point: GeoPoint) {
		self.0.push(point);
	}

	/// Bounding rectangle, `None` if the polygon has no vertices.
	pub fn bounds(&self) -> Option<GeoRect> {
		compute_bounds(&self.0)
	}

	/// Centroid of the bounding rectangle.
	pub fn center(&self) -> Option<GeoPoint> {
		polygon_center(&self.0)
	}

	pub fn contains(&self, point: &GeoPoint) -> bool {
		is_point_in_polygon(point, &self.0)
	}

	/// Long edge of the projected bounding rectangle in meters.
	pub fn span(&self) -> Option<f64> {
		polygon_span(&self.0)
	}

	pub fn scale(&self, table: &ScaleTable) -> Result<f64> {
		polygon_scale(&self.0, table)
	}
}

impl Debug for GeoPolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(GeoPolygon, GeoPoint);

impl From<geo::LineString<f64>> for GeoPolygon {
	fn from(line: geo::LineString<f64>) -> Self {
		GeoPolygon(line.into_iter().map(GeoPoint::from).collect())
	}
}

/// Uses the exterior ring; interior rings are dropped.
impl From<geo::Polygon<f64>> for GeoPolygon {
	fn from(polygon: geo::Polygon<f64>) -> Self {
		let (exterior, _interiors) = polygon.into_inner();
		GeoPolygon::from(exterior)
	}
}

impl From<&GeoPolygon> for geo::LineString<f64> {
	fn from(polygon: &GeoPolygon) -> Self {
		geo::LineString::from(polygon.0.iter().copied().map(geo::Coord::from).collect::<Vec<_>>())
	}
}
