//! Containment tests, bounding rectangles and zoom-scale interpolation for
//! geodetic polygons.
//!
//! All functions are pure: they take plain coordinate data and return freshly
//! built values. Polygons are ordered vertex slices that are implicitly closed,
//! the last vertex connects back to the first.

pub mod bounds;
pub mod contains;
mod macros;
mod polygon;
pub mod scale;
mod zones;

pub use bounds::*;
pub use contains::*;
pub use geozone_core::{GeoPoint, GeoRect, MercatorPoint, ScaleTable};
pub use polygon::*;
pub use scale::*;
pub use zones::*;
