pub mod sweep_event;
