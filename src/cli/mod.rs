//! CLI module for mandi

pub mod app;
pub mod commands;

pub use app::MandiApp;
pub use commands::{Cli, Commands};
