//! Point-in-rectangle and point-in-polygon tests.
//!
//! Both tests fail closed: empty rectangles and empty polygons contain nothing.

use crate::compute_bounds;
use geozone_core::{GeoPoint, GeoRect};

/// Returns `true` if `point` lies within `rect`, edges included.
///
/// An empty rectangle (see [`GeoRect::is_empty`]) never contains a point.
///
/// # Examples
/// ```
/// use geozone_geometry::{GeoPoint, GeoRect, is_point_in_rect};
///
/// let rect = GeoRect::from_edges(0.0, 0.0, 10.0, 10.0);
/// assert!(is_point_in_rect(&GeoPoint::new(10.0, 0.0), &rect));
/// assert!(!is_point_in_rect(&GeoPoint::new(10.5, 0.0), &rect));
/// assert!(!is_point_in_rect(&GeoPoint::new(0.0, 0.0), &GeoRect::new_empty()));
/// ```
pub fn is_point_in_rect(point: &GeoPoint, rect: &GeoRect) -> bool {
	if rect.is_empty() {
		return false;
	}

	point.longitude >= rect.sw.longitude
		&& point.latitude >= rect.sw.latitude
		&& point.longitude <= rect.ne.longitude
		&& point.latitude <= rect.ne.latitude
}

/// Returns `true` if `point` lies inside `polygon` by the even-odd rule.
///
/// Points outside the polygon's bounding rectangle are rejected up front.
/// The remaining points are tested by casting a horizontal ray and counting
/// the polygon edges it crosses; an odd count means inside.
///
/// Points exactly on an edge or a vertex may return either value.
///
/// # Examples
/// ```
/// use geozone_geometry::{GeoPoint, is_point_in_polygon};
///
/// let square = [[0, 0], [10, 0], [10, 10], [0, 10]].map(|p| GeoPoint::from(&p));
/// assert!(is_point_in_polygon(&GeoPoint::new(5.0, 5.0), &square));
/// assert!(!is_point_in_polygon(&GeoPoint::new(15.0, 5.0), &square));
/// assert!(!is_point_in_polygon(&GeoPoint::new(5.0, 5.0), &[]));
/// ```
pub fn is_point_in_polygon(point: &GeoPoint, polygon: &[GeoPoint]) -> bool {
	let Some(rect) = compute_bounds(polygon) else {
		return false;
	};

	if !is_point_in_rect(point, &rect) {
		log::trace!("{point:?} is outside of {rect:?}");
		return false;
	}

	let x = point.longitude;
	let y = point.latitude;
	let mut inside = false;
	let mut j = polygon.len() - 1;

	for i in 0..polygon.len() {
		let xi = polygon[i].longitude;
		let yi = polygon[i].latitude;
		let xj = polygon[j].longitude;
		let yj = polygon[j].latitude;

		// edge straddles the ray and the crossing lies east of the point
		if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
			inside = !inside;
		}
		j = i;
	}

	inside
}
