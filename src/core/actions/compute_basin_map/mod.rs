#[allow(clippy::module_inception)]
pub mod compute_basin_map;
pub mod ports;
