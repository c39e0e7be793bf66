//! Conversion between WGS84 longitude/latitude and spherical Web-Mercator (EPSG:3857).
//!
//! The forward projection is singular at the poles. Instead of producing
//! infinities, `y` is clamped to [`max_safe_y`], the value the formula reaches
//! when evaluated at exactly 90° in double precision.

use crate::{GEO_HALF_SIZE, GEO_RADIUS, GeoPoint, MercatorPoint};
use std::f64::consts::{FRAC_PI_2, PI};

/// Largest projected `y` ever returned by [`to_mercator`], `R·ln(tan(π/2))`.
///
/// ```
/// let y_max = geozone_core::projection::max_safe_y();
/// assert!(y_max.is_finite());
/// assert!(y_max > 2.3e8);
/// ```
#[must_use]
pub fn max_safe_y() -> f64 {
	GEO_RADIUS * FRAC_PI_2.tan().ln()
}

/// Projects a geodetic point to Web-Mercator meters.
///
/// Latitudes at or beyond ±90° yield exactly `±max_safe_y()`.
/// NaN coordinates propagate into the result.
///
/// # Examples
/// ```
/// use geozone_core::{GeoPoint, projection::{max_safe_y, to_mercator}};
///
/// let m = to_mercator(&GeoPoint::new(0.0, 0.0));
/// assert_eq!(m.x, 0.0);
/// assert!(m.y.abs() < 1e-6);
///
/// assert_eq!(to_mercator(&GeoPoint::new(0.0, 90.0)).y, max_safe_y());
/// assert_eq!(to_mercator(&GeoPoint::new(0.0, -95.0)).y, -max_safe_y());
/// ```
#[must_use]
pub fn to_mercator(point: &GeoPoint) -> MercatorPoint {
	let x = GEO_HALF_SIZE * point.longitude / 180.0;
	let y_max = max_safe_y();

	// beyond the poles tan() turns zero or negative and ln() stops being finite
	let y = if point.latitude >= 90.0 {
		y_max
	} else if point.latitude <= -90.0 {
		-y_max
	} else {
		let y = GEO_RADIUS * (PI * (point.latitude + 90.0) / 360.0).tan().ln();
		y.clamp(-y_max, y_max)
	};

	MercatorPoint::new(x, y)
}

/// Converts Web-Mercator meters back to longitude/latitude.
///
/// This is the exact inverse of [`to_mercator`]; every finite input maps to a
/// latitude within `[-90, 90]`.
#[must_use]
pub fn to_geodetic(point: &MercatorPoint) -> GeoPoint {
	let longitude = point.x * 180.0 / GEO_HALF_SIZE;
	let latitude = (point.y / GEO_RADIUS).exp().atan() * 360.0 / PI - 90.0;
	GeoPoint::new(longitude, latitude)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	#[test]
	fn max_safe_y_value() {
		assert_abs_diff_eq!(max_safe_y(), 238_107_693.264_967_65, epsilon = 1e-6);
	}

	#[test]
	fn to_mercator_reference() {
		let m = to_mercator(&GeoPoint::new(116.397499, 39.908722));
		assert_abs_diff_eq!(m.x, 12_957_310.318_290_57, epsilon = 1e-6);
		assert_abs_diff_eq!(m.y, 4_852_686.861_452_196, epsilon = 1e-6);
	}

	#[test]
	fn to_mercator_reference_center() {
		let m = to_mercator(&GeoPoint::new(122.1440015, 37.426182));
		assert_abs_diff_eq!(m.x, 13_597_008.050_432_844, epsilon = 1e-6);
		assert_abs_diff_eq!(m.y, 4_498_678.723_147_125, epsilon = 1e-6);
	}

	#[test]
	fn to_geodetic_reference() {
		let p = to_geodetic(&MercatorPoint::new(12_957_310.318_290_57, 4_852_686.861_452_196));
		assert_abs_diff_eq!(p.longitude, 116.397499, epsilon = 1e-9);
		assert_abs_diff_eq!(p.latitude, 39.908722, epsilon = 1e-9);
	}

	#[test]
	fn world_edges() {
		let half = to_mercator(&GeoPoint::new(180.0, 0.0));
		assert_abs_diff_eq!(half.x, GEO_HALF_SIZE, epsilon = 1e-6);
		assert_abs_diff_eq!(half.x, 20_037_508.342_789_244, epsilon = 1e-6);

		let edge = to_mercator(&GeoPoint::new(0.0, 85.051_128_779_806_59));
		assert_abs_diff_eq!(edge.y, 20_037_508.342_789_244, epsilon = 1e-3);
	}

	#[rstest]
	#[case(90.0, 1.0)]
	#[case(-90.0, -1.0)]
	#[case(90.000001, 1.0)]
	#[case(100.0, 1.0)]
	#[case(-100.0, -1.0)]
	#[case(f64::INFINITY, 1.0)]
	#[case(f64::NEG_INFINITY, -1.0)]
	fn pole_clamping(#[case] latitude: f64, #[case] sign: f64) {
		let y = to_mercator(&GeoPoint::new(12.0, latitude)).y;
		assert!(y.is_finite());
		assert_eq!(y, sign * max_safe_y());
	}

	#[test]
	fn nan_propagates() {
		let m = to_mercator(&GeoPoint::new(f64::NAN, f64::NAN));
		assert!(m.x.is_nan());
		assert!(m.y.is_nan());
	}

	#[rstest]
	#[case(0.0, 0.0)]
	#[case(116.397499, 39.908722)]
	#[case(-73.985656, 40.748433)]
	#[case(151.215256, -33.856159)]
	#[case(-179.999, -89.9999)]
	#[case(179.999, 89.9)]
	#[case(13.4, 85.0511)]
	#[case(-0.000001, 0.000001)]
	fn round_trip(#[case] longitude: f64, #[case] latitude: f64) {
		let back = GeoPoint::new(longitude, latitude).to_mercator().to_geodetic();
		assert_abs_diff_eq!(back.longitude, longitude, epsilon = 1e-9);
		assert_abs_diff_eq!(back.latitude, latitude, epsilon = 1e-9);
	}

	#[test]
	fn max_safe_y_maps_back_to_pole() {
		let p = to_geodetic(&MercatorPoint::new(0.0, max_safe_y()));
		assert_abs_diff_eq!(p.latitude, 90.0, epsilon = 1e-9);
		let p = to_geodetic(&MercatorPoint::new(0.0, -max_safe_y()));
		assert_abs_diff_eq!(p.latitude, -90.0, epsilon = 1e-9);
	}
}
