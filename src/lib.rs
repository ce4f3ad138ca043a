pub mod config;
pub mod song;
pub mod time;
