//! Session controller: keeps the basin map in step with the current roots.
//!
//! # Architecture
//!
//! The session follows the ports & adapters pattern:
//! - **Input**: root changes (`set_root*`, `restore_defaults`, `cancel`)
//! - **Output**: `SessionPort` receiving `SweepEvent`s on the worker thread
//! - **Core**: the sweep from `core/actions/compute_basin_map`
//!
//! `ChannelPort` is the stock adapter that moves events onto the consumer's
//! own thread.

pub mod adapters;
mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use adapters::channel_port::ChannelPort;
pub use controller::Session;
pub use data::session_config::SessionConfig;
pub use errors::SessionError;
pub use events::sweep_event::SweepEvent;
pub use ports::session_port::SessionPort;
