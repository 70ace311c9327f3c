pub mod basin_classifier;
pub mod progress_sink;
