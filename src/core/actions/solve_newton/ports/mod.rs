pub mod complex_function;
