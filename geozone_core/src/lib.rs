//! Value types, Web-Mercator projection and configuration shared by the geozone crates.

pub mod config;
pub mod projection;
pub mod types;

pub use config::*;
pub use types::*;
