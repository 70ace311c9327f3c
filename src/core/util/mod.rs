pub mod pixel_to_grid_index;
