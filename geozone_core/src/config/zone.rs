use crate::GeoPoint;
use anyhow::{Result, ensure};
use serde::Deserialize;

/// A named polygonal service zone, e.g. a delivery area.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ZoneConfig {
	pub name: String,

	/// Outline of the zone. The last vertex connects back to the first.
	pub polygon: Vec<GeoPoint>,
}

impl ZoneConfig {
	pub fn verify(&self) -> Result<()> {
		ensure!(!self.name.trim().is_empty(), "zone name must not be empty");
		ensure!(
			self.polygon.len() >= 3,
			"zone '{}' must have at least 3 vertices, found {}",
			self.name,
			self.polygon.len()
		);
		Ok(())
	}
}

impl<T> From<(&str, Vec<T>)> for ZoneConfig
where
	GeoPoint: From<T>,
{
	fn from(value: (&str, Vec<T>)) -> Self {
		ZoneConfig {
			name: value.0.to_string(),
			polygon: value.1.into_iter().map(GeoPoint::from).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_valid() {
		let zone = ZoneConfig::from(("square", vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]));
		assert!(zone.verify().is_ok());
	}

	#[test]
	fn verify_too_few_vertices() {
		let zone = ZoneConfig::from(("line", vec![[0.0, 0.0], [1.0, 1.0]]));
		let err = zone.verify().unwrap_err();
		assert_eq!(err.to_string(), "zone 'line' must have at least 3 vertices, found 2");
	}

	#[test]
	fn verify_blank_name() {
		let zone = ZoneConfig::from(("  ", vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]));
		assert!(zone.verify().is_err());
	}
}
