use crate::GeoPolygon;
use geozone_core::{Config, GeoPoint, ZoneConfig};

/// Named service zones, e.g. delivery areas, checked in insertion order.
///
/// # Examples
/// ```
/// use geozone_geometry::{GeoPoint, ServiceZones};
///
/// let zones = ServiceZones::from(vec![
/// 	("west", vec![[0.0, 0.0], [5.0, 0.0], [5.0, 5.0], [0.0, 5.0]]),
/// 	("east", vec![[5.0, 0.0], [10.0, 0.0], [10.0, 5.0], [5.0, 5.0]]),
/// ]);
/// assert_eq!(zones.locate(&GeoPoint::new(7.0, 2.0)), Some("east"));
/// assert_eq!(zones.locate(&GeoPoint::new(7.0, 9.0)), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceZones {
	zones: Vec<(String, GeoPolygon)>,
}

impl ServiceZones {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_config(config: &Config) -> Self {
		let zones = ServiceZones::from(config.zones.as_slice());
		log::debug!("built {} service zones", zones.len());
		zones
	}

	pub fn add(&mut self, name: &str, polygon: GeoPolygon) {
		self.zones.push((name.to_string(), polygon));
	}

	pub fn len(&self) -> usize {
		self.zones.len()
	}

	pub fn is_empty(&self) -> bool {
		self.zones.is_empty()
	}

	pub fn get(&self, name: &str) -> Option<&GeoPolygon> {
		self.zones.iter().find(|(n, _)| n == name).map(|(_, polygon)| polygon)
	}

	/// Name of the first zone containing `point`.
	pub fn locate(&self, point: &GeoPoint) -> Option<&str> {
		self
			.zones
			.iter()
			.find(|(_, polygon)| polygon.contains(point))
			.map(|(name, _)| name.as_str())
	}

	/// Returns `true` if any zone contains `point`.
	pub fn contains(&self, point: &GeoPoint) -> bool {
		self.locate(point).is_some()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.zones.iter().map(|(name, _)| name.as_str())
	}
}

impl From<&[ZoneConfig]> for ServiceZones {
	fn from(configs: &[ZoneConfig]) -> Self {
		let mut zones = ServiceZones::new();
		for config in configs {
			zones.add(&config.name, GeoPolygon::from(config.polygon.as_slice()));
		}
		zones
	}
}

impl<T> From<Vec<(&str, Vec<T>)>> for ServiceZones
where
	GeoPoint: From<T>,
{
	fn from(value: Vec<(&str, Vec<T>)>) -> Self {
		let mut zones = ServiceZones::new();
		for (name, polygon) in value {
			zones.add(name, GeoPolygon::from(polygon));
		}
		zones
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::Path;

	fn zones() -> ServiceZones {
		ServiceZones::from(vec![
			("inner", vec![[2.0, 2.0], [4.0, 2.0], [4.0, 4.0], [2.0, 4.0]]),
			("outer", vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]),
		])
	}

	#[test]
	fn first_match_wins() {
		let zones = zones();
		assert_eq!(zones.locate(&GeoPoint::new(3.0, 3.0)), Some("inner"));
		assert_eq!(zones.locate(&GeoPoint::new(8.0, 8.0)), Some("outer"));
		assert_eq!(zones.locate(&GeoPoint::new(11.0, 8.0)), None);
		assert!(zones.contains(&GeoPoint::new(1.0, 1.0)));
		assert!(!zones.contains(&GeoPoint::new(-1.0, 1.0)));
	}

	#[test]
	fn names_and_lookup() {
		let zones = zones();
		assert_eq!(zones.len(), 2);
		assert_eq!(zones.names().collect::<Vec<_>>(), vec!["inner", "outer"]);
		assert_eq!(zones.get("inner").unwrap().len(), 4);
		assert!(zones.get("missing").is_none());
	}

	#[test]
	fn empty_zones_contain_nothing() {
		let zones = ServiceZones::new();
		assert!(zones.is_empty());
		assert_eq!(zones.locate(&GeoPoint::new(0.0, 0.0)), None);
	}

	#[test]
	fn from_config_file() {
		let config = Config::from_path(Path::new("../testdata/config.yml")).unwrap();
		let zones = ServiceZones::from_config(&config);
		assert_eq!(zones.names().collect::<Vec<_>>(), vec!["campus", "square"]);
		assert_eq!(zones.locate(&GeoPoint::new(122.144, 37.426)), Some("campus"));
		assert_eq!(zones.locate(&GeoPoint::new(5.0, 5.0)), Some("square"));
		assert_eq!(zones.locate(&GeoPoint::new(50.0, 50.0)), None);
	}
}
