pub mod config;
pub mod content;
pub mod events;
pub mod session;
pub mod view;
