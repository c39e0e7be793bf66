use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Zoom levels of the mini-program map component, coarsest first.
const MINI_PROGRAM_LEVELS: [f64; 18] = [
	3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0,
];

/// Scale-bar length in meters shown by the mini-program map at each level of
/// [`MINI_PROGRAM_LEVELS`].
const MINI_PROGRAM_THRESHOLDS: [f64; 18] = [
	1_000_000.0,
	500_000.0,
	200_000.0,
	100_000.0,
	50_000.0,
	50_000.0,
	20_000.0,
	10_000.0,
	5_000.0,
	2_000.0,
	1_000.0,
	500.0,
	200.0,
	100.0,
	50.0,
	50.0,
	20.0,
	10.0,
];

/// A lookup table from display zoom level to projected span length.
///
/// The table is stored as two parallel sequences: `levels[i]` is the zoom scale
/// used when the visible span is `thresholds[i]` meters. Thresholds are ordered
/// from the largest span (coarsest level) to the smallest (finest level).
///
/// # Examples
/// ```
/// use geozone_core::ScaleTable;
///
/// let table = ScaleTable::new(vec![3.0, 4.0, 5.0], vec![1000.0, 500.0, 200.0]).unwrap();
/// assert_eq!(table.coarsest(), 3.0);
/// assert_eq!(table.finest(), 5.0);
///
/// assert!(ScaleTable::new(vec![3.0, 4.0], vec![1000.0]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScaleTableDef", into = "ScaleTableDef")]
pub struct ScaleTable {
	levels: Vec<f64>,
	thresholds: Vec<f64>,
}

impl ScaleTable {
	/// Creates a table from parallel `levels` and `thresholds`.
	///
	/// # Errors
	///
	/// Returns an error if the sequences are empty, differ in length, or the
	/// thresholds are not ordered from largest to smallest.
	pub fn new(levels: Vec<f64>, thresholds: Vec<f64>) -> Result<Self> {
		ensure!(!levels.is_empty(), "scale table must have at least one level");
		ensure!(
			levels.len() == thresholds.len(),
			"scale table has {} levels but {} thresholds",
			levels.len(),
			thresholds.len()
		);
		ensure!(
			thresholds.windows(2).all(|w| w[0] >= w[1]),
			"scale table thresholds must be ordered from largest to smallest: {thresholds:?}"
		);
		Ok(Self { levels, thresholds })
	}

	/// Builds a table from `(level, threshold)` pairs, kept in the given order.
	pub fn from_pairs<I>(pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (f64, f64)>,
	{
		let (levels, thresholds) = pairs.into_iter().unzip();
		Self::new(levels, thresholds)
	}

	/// The table of the mini-program map component: levels 3 to 20.
	#[must_use]
	pub fn mini_program() -> Self {
		Self {
			levels: MINI_PROGRAM_LEVELS.to_vec(),
			thresholds: MINI_PROGRAM_THRESHOLDS.to_vec(),
		}
	}

	pub fn levels(&self) -> &[f64] {
		&self.levels
	}

	pub fn thresholds(&self) -> &[f64] {
		&self.thresholds
	}

	pub fn len(&self) -> usize {
		self.levels.len()
	}

	/// Always `false` for a constructed table; kept for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.levels.is_empty()
	}

	/// Level used for the largest spans.
	pub fn coarsest(&self) -> f64 {
		self.levels[0]
	}

	/// Level used for the smallest spans.
	pub fn finest(&self) -> f64 {
		self.levels[self.levels.len() - 1]
	}
}

impl Default for ScaleTable {
	fn default() -> Self {
		Self::mini_program()
	}
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScaleTableDef {
	levels: Vec<f64>,
	thresholds: Vec<f64>,
}

impl TryFrom<ScaleTableDef> for ScaleTable {
	type Error = anyhow::Error;

	fn try_from(def: ScaleTableDef) -> Result<Self> {
		ScaleTable::new(def.levels, def.thresholds)
	}
}

impl From<ScaleTable> for ScaleTableDef {
	fn from(table: ScaleTable) -> Self {
		Self {
			levels: table.levels,
			thresholds: table.thresholds,
		}
	}
}
