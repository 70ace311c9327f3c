//! Port definitions for the session controller.

pub mod session_port;
