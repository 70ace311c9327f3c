pub mod channel_port;
