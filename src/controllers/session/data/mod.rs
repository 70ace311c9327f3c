pub mod session_config;
