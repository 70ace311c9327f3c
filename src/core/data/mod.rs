pub mod basin;
pub mod complex;
pub mod complex_rect;
pub mod root_set;
pub mod sample_grid;
