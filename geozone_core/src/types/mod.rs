mod constants;
mod geo_point;
mod geo_rect;
mod mercator_point;
mod scale_table;

pub use constants::*;
pub use geo_point::*;
pub use geo_rect::*;
pub use mercator_point::*;
pub use scale_table::*;
