//! Bounding rectangles and bounding-box centroids of polygons.

use geozone_core::{GeoPoint, GeoRect};

/// Computes the smallest axis-aligned rectangle enclosing all vertices.
///
/// Longitude and latitude extremes are taken independently. Returns `None`
/// for an empty polygon. A NaN coordinate yields an empty rectangle.
///
/// # Examples
/// ```
/// use geozone_geometry::{GeoPoint, compute_bounds};
///
/// let polygon = [GeoPoint::new(0.0, 0.0), GeoPoint::new(4.0, 1.0), GeoPoint::new(2.0, 3.0)];
/// let rect = compute_bounds(&polygon).unwrap();
/// assert_eq!(rect.as_array(), [0.0, 0.0, 4.0, 3.0]);
///
/// assert!(compute_bounds(&[]).is_none());
/// ```
pub fn compute_bounds(polygon: &[GeoPoint]) -> Option<GeoRect> {
	if polygon.is_empty() {
		return None;
	}

	let mut rect = GeoRect::new_empty();
	for point in polygon {
		rect.include_point(point);
	}
	Some(rect)
}

/// Returns the midpoint of the rectangle's south-west and north-east corners.
///
/// This is the centroid of the bounding box, not of the polygon it was computed from.
pub fn centroid_of_bounds(rect: &GeoRect) -> GeoPoint {
	GeoPoint::new(
		(rect.ne.longitude + rect.sw.longitude) / 2.0,
		(rect.ne.latitude + rect.sw.latitude) / 2.0,
	)
}

/// Centroid of the polygon's bounding rectangle, `None` for an empty polygon.
pub fn polygon_center(polygon: &[GeoPoint]) -> Option<GeoPoint> {
	compute_bounds(polygon).map(|rect| centroid_of_bounds(&rect))
}
