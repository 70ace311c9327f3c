pub mod cancellation;
pub mod compute_basin_map;
pub mod solve_newton;
