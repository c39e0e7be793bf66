use std::f64::consts::PI;

/// Radius of the WGS84 sphere in meters.
pub const GEO_RADIUS: f64 = 6_378_137.0;

/// Half the edge length of the Web-Mercator world square, `π·R`.
pub const GEO_HALF_SIZE: f64 = PI * GEO_RADIUS;
