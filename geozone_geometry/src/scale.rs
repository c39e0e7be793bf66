//! Derives a fractional map zoom scale from the projected size of a polygon.

use crate::compute_bounds;
use anyhow::{Context, Result, ensure};
use geozone_core::{GeoPoint, ScaleTable};

/// Returns the long edge, in Web-Mercator meters, of the polygon's bounding rectangle.
///
/// Both corners of the bounding rectangle are projected and the larger of the
/// x and y extents is returned. `None` for an empty polygon.
pub fn polygon_span(polygon: &[GeoPoint]) -> Option<f64> {
	let [sw, ne] = compute_bounds(polygon)?.to_mercator();
	let dx = (ne.x - sw.x).abs();
	let dy = (ne.y - sw.y).abs();
	if dx.is_nan() || dy.is_nan() {
		return Some(f64::NAN);
	}
	Some(dx.max(dy))
}

/// Maps a span length to a zoom scale by piecewise-linear lookup.
///
/// `levels` and `thresholds` are parallel: `thresholds` runs from the largest
/// span (coarsest level) down to the smallest span (finest level).
///
/// - `target >= thresholds[0]` returns `levels[0]`.
/// - `target < thresholds[last]` returns `levels[last]`.
/// - otherwise the first pair with `curr > target >= next` yields
///   `levels[next] + (target - next) / (curr - next)`.
///
/// Adjacent equal thresholds never bracket a target and are skipped.
///
/// # Errors
///
/// Returns an error if the two sequences differ in length or are empty.
///
/// # Examples
/// ```
/// use geozone_geometry::interpolate_scale;
///
/// let levels = [3.0, 4.0, 5.0];
/// let thresholds = [1000.0, 500.0, 100.0];
/// assert_eq!(interpolate_scale(5000.0, &levels, &thresholds).unwrap(), 3.0);
/// assert_eq!(interpolate_scale(750.0, &levels, &thresholds).unwrap(), 4.5);
/// assert_eq!(interpolate_scale(10.0, &levels, &thresholds).unwrap(), 5.0);
/// assert!(interpolate_scale(10.0, &levels, &thresholds[..2]).is_err());
/// ```
pub fn interpolate_scale(target: f64, levels: &[f64], thresholds: &[f64]) -> Result<f64> {
	ensure!(
		levels.len() == thresholds.len(),
		"scale table has {} levels but {} thresholds",
		levels.len(),
		thresholds.len()
	);
	ensure!(!levels.is_empty(), "scale table must have at least one level");

	let last = levels.len() - 1;

	if target >= thresholds[0] || target.is_nan() {
		return Ok(levels[0]);
	}

	if target < thresholds[last] {
		return Ok(levels[last]);
	}

	for (index, pair) in thresholds.windows(2).enumerate() {
		let (curr, next) = (pair[0], pair[1]);
		if target >= next && target < curr {
			log::trace!("span {target} falls between {curr} and {next}");
			return Ok(levels[index + 1] + (target - next) / (curr - next));
		}
	}

	// only reachable for tables that are not ordered from largest to smallest
	Ok(levels[0])
}

/// Zoom scale at which `polygon` fits the map according to `table`.
///
/// # Errors
///
/// Returns an error for an empty polygon.
///
/// # Examples
/// ```
/// use geozone_geometry::{GeoPoint, ScaleTable, polygon_scale};
///
/// let polygon = [GeoPoint::new(0.0, 0.0), GeoPoint::new(20.0, 10.0)];
/// assert_eq!(polygon_scale(&polygon, &ScaleTable::mini_program()).unwrap(), 3.0);
/// assert!(polygon_scale(&[], &ScaleTable::mini_program()).is_err());
/// ```
pub fn polygon_scale(polygon: &[GeoPoint], table: &ScaleTable) -> Result<f64> {
	let span = polygon_span(polygon).context("cannot derive a scale from an empty polygon")?;
	interpolate_scale(span, table.levels(), table.thresholds())
}
