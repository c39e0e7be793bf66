//! YAML configuration: the zoom-scale table and the named service zones.

mod zone;

pub use zone::ZoneConfig;

use crate::ScaleTable;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::{
	collections::HashSet,
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Table used to pick a map zoom scale from a projected span.
	/// Defaults to the mini-program map table.
	#[serde(default)]
	pub scales: ScaleTable,

	/// Named service zones, checked in the listed order.
	#[serde(default)]
	pub zones: Vec<ZoneConfig>,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_reader(reader)?;
		config.verify()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_str(text)?;
		config.verify()?;
		Ok(config)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		log::debug!("load config from {path:?}");
		let file = File::open(path).with_context(|| format!("Failed to open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("Failed to parse config file {path:?}"))
	}

	/// Checks every zone and rejects duplicate zone names.
	pub fn verify(&self) -> Result<()> {
		let mut names = HashSet::new();
		for zone in &self.zones {
			zone.verify()?;
			ensure!(names.insert(zone.name.as_str()), "duplicate zone name '{}'", zone.name);
		}
		Ok(())
	}

	pub fn zone(&self, name: &str) -> Option<&ZoneConfig> {
		self.zones.iter().find(|zone| zone.name == name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeoPoint;
	use pretty_assertions::assert_eq;

	#[test]
	fn parse_empty_config() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
	}

	#[test]
	fn parse_example_config() {
		let cfg = Config::from_path(Path::new("../testdata/config.yml")).unwrap();

		assert_eq!(
			cfg.scales,
			ScaleTable::new(vec![10.0, 11.0, 12.0, 13.0, 14.0], vec![10_000.0, 5_000.0, 2_000.0, 1_000.0, 500.0]).unwrap()
		);
		assert_eq!(cfg.zones.len(), 2);

		let campus = cfg.zone("campus").unwrap();
		assert_eq!(campus.polygon.len(), 5);
		assert_eq!(campus.polygon[0], GeoPoint::new(122.141711, 37.429029));

		assert_eq!(cfg.zone("square").unwrap().polygon.len(), 4);
		assert!(cfg.zone("elsewhere").is_none());
	}

	#[test]
	fn scales_default_to_mini_program() {
		let cfg = Config::from_string("zones: []").unwrap();
		assert_eq!(cfg.scales, ScaleTable::mini_program());
	}

	#[test]
	fn parse_invalid_scales() {
		let result = Config::from_string("scales:\n  levels: [3, 4]\n  thresholds: [100]");
		assert!(result.is_err());
	}

	#[test]
	fn parse_unknown_field() {
		assert!(Config::from_string("zoom: 3").is_err());
	}

	#[test]
	fn parse_duplicate_zone_names() {
		let yaml = "
zones:
  - name: a
    polygon: [{ longitude: 0, latitude: 0 }, { longitude: 1, latitude: 0 }, { longitude: 1, latitude: 1 }]
  - name: a
    polygon: [{ longitude: 0, latitude: 0 }, { longitude: 2, latitude: 0 }, { longitude: 2, latitude: 2 }]
";
		let err = Config::from_string(yaml).unwrap_err();
		assert_eq!(err.to_string(), "duplicate zone name 'a'");
	}

	#[test]
	fn missing_file() {
		let err = Config::from_path(Path::new("../testdata/does_not_exist.yml")).unwrap_err();
		assert!(err.to_string().starts_with("Failed to open config file"));
	}
}
