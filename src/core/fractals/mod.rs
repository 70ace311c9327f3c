pub mod cubic;
