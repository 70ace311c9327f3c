pub mod ports;
#[allow(clippy::module_inception)]
pub mod solve_newton;
